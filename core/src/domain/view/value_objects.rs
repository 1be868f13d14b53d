use crate::domain::{profile::value_objects::ProfilePatch, recipe::entities::Recipe};

/// Screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Home,
    History,
    Profile,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Navigate(NavTab),
    AnalysisStarted,
    AnalysisSucceeded { request: u64, recipes: Vec<Recipe> },
    AnalysisFailed { request: u64 },
    ChooseRecipe(usize),
    CancelChoices,
    OpenHistoryEntry(usize),
    CloseRecipe,
    EditProfile(ProfilePatch),
    SaveProfile,
    ToggleLanguage,
    SubstitutesLoaded {
        recipe_id: String,
        ingredient: String,
        substitutes: Vec<String>,
    },
    DismissAlert,
}

/// Persisted-state changes requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    RecordRecipe(Recipe),
    PatchProfile(ProfilePatch),
    ToggleLanguage,
}
