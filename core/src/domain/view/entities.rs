use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Choices,
    Profile,
    History,
    Recipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    AnalysisFailed,
}

/// Everything the screens need that is not persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub view: View,
    pub loading: bool,
    pub choices: Vec<Recipe>,
    pub current_recipe: Option<Recipe>,
    /// Substitutes fetched while the current recipe is open, by ingredient.
    pub substitutes: BTreeMap<String, Vec<String>>,
    pub alert: Option<Alert>,
    /// Ticket of the analysis whose result is still wanted.
    pub pending_request: Option<u64>,
    pub last_request: u64,
}

impl Session {
    pub fn cached_substitutes(&self, ingredient: &str) -> Option<&[String]> {
        self.substitutes.get(ingredient).map(Vec::as_slice)
    }

    pub fn current_recipe_id(&self) -> Option<&str> {
        self.current_recipe.as_ref().map(|r| r.id.as_str())
    }
}
