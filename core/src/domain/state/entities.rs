use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{localization::Language, profile::entities::UserProfile, recipe::entities::Recipe};

/// Fixed key the whole state document is stored under.
pub const STORAGE_KEY: &str = "visionchef_state_v2";

/// Maximum number of recipes kept in history.
pub const HISTORY_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub language: Language,
    pub user_profile: UserProfile,
    pub history: Vec<Recipe>,
}

impl AppState {
    /// Puts `recipe` first and evicts the oldest entries past [`HISTORY_LIMIT`].
    pub fn prepend_history(&mut self, recipe: Recipe) {
        self.history.insert(0, recipe);
        self.history.truncate(HISTORY_LIMIT);
    }
}
