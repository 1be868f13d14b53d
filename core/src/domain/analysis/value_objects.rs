use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::domain::{
    localization::Language, profile::entities::UserProfile, proxy::value_objects::InlineImage,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Suggest recipes that can be cooked from the given ingredients.
    #[default]
    Ingredients,
    /// Evaluate a finished meal.
    Meal,
}

impl AnalysisMode {
    pub fn is_meal(&self) -> bool {
        matches!(self, AnalysisMode::Meal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisInput {
    Image(InlineImage),
    Text(String),
}

impl AnalysisInput {
    pub fn from_image_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        AnalysisInput::Image(InlineImage {
            mime_type: mime_type.into(),
            data: general_purpose::STANDARD.encode(bytes),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        AnalysisInput::Text(text.into())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    pub input: AnalysisInput,
    pub mode: AnalysisMode,
    pub profile: UserProfile,
    pub language: Language,
}

/// A recipe as the model writes it, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub calories: Option<serde_json::Value>,
    #[serde(default, alias = "prep_time")]
    pub prep_time: Option<String>,
    #[serde(default, alias = "detected_ingredients")]
    pub detected_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeReply {
    Wrapped { recipes: Vec<RecipeCandidate> },
    Bare(Vec<RecipeCandidate>),
    Single(RecipeCandidate),
}

impl RecipeReply {
    pub fn into_candidates(self) -> Vec<RecipeCandidate> {
        match self {
            RecipeReply::Wrapped { recipes } => recipes,
            RecipeReply::Bare(recipes) => recipes,
            RecipeReply::Single(recipe) => vec![recipe],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SubstitutesReply {
    Wrapped { substitutes: Vec<String> },
    Bare(Vec<String>),
}

impl SubstitutesReply {
    pub fn into_items(self) -> Vec<String> {
        match self {
            SubstitutesReply::Wrapped { substitutes } => substitutes,
            SubstitutesReply::Bare(items) => items,
        }
    }
}
