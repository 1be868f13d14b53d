use tracing::{instrument, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    localization::Language,
    profile::value_objects::ProfilePatch,
    recipe::entities::Recipe,
    state::{entities::AppState, ports::StatePersistence},
};

/// Owns the persisted [`AppState`]. Every mutation writes the full document
/// back before returning.
#[derive(Debug)]
pub struct StateStore<P>
where
    P: StatePersistence,
{
    persistence: P,
    key: String,
    state: AppState,
}

impl<P> StateStore<P>
where
    P: StatePersistence,
{
    /// Loads the stored state, falling back to the default on any read or parse failure.
    #[instrument(skip(persistence))]
    pub fn load(persistence: P, key: &str) -> Self {
        let state = match persistence.read(key) {
            Ok(Some(payload)) => match serde_json::from_str::<AppState>(&payload) {
                Ok(state) if state.history.iter().all(Recipe::is_complete) => state,
                Ok(_) => {
                    warn!("Discarding stored state with an incomplete history entry");
                    AppState::default()
                }
                Err(e) => {
                    warn!("Discarding malformed stored state: {}", e);
                    AppState::default()
                }
            },
            Ok(None) => AppState::default(),
            Err(e) => {
                warn!("Failed to read stored state: {}", e);
                AppState::default()
            }
        };

        Self {
            persistence,
            key: key.to_string(),
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn persist(&self) -> Result<(), CoreError> {
        let payload = serde_json::to_string(&self.state)
            .map_err(|e| CoreError::StorageError(format!("Failed to serialize state: {}", e)))?;
        self.persistence.write(&self.key, &payload)
    }

    /// Applies `mutation` and persists the result.
    pub fn update<F>(&mut self, mutation: F) -> Result<(), CoreError>
    where
        F: FnOnce(&mut AppState),
    {
        mutation(&mut self.state);
        self.persist()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), CoreError> {
        self.update(|state| state.language = language)
    }

    pub fn toggle_language(&mut self) -> Result<(), CoreError> {
        self.update(|state| state.language = state.language.toggled())
    }

    pub fn patch_profile(&mut self, patch: ProfilePatch) -> Result<(), CoreError> {
        self.update(|state| patch.apply_to(&mut state.user_profile))
    }

    pub fn record_recipe(&mut self, recipe: Recipe) -> Result<(), CoreError> {
        self.update(|state| state.prepend_history(recipe))
    }
}
