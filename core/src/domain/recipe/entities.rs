use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::common::generate_uuid_v7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_calories"
    )]
    pub calories: Option<u32>,
    pub prep_time: String,
    #[serde(default)]
    pub detected_ingredients: Vec<String>,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub is_meal_analysis: bool,
}

/// Rounds a calorie figure to a whole number; negative or non-finite values are dropped.
pub fn round_calories(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value <= u32::MAX as f64).then(|| value.round() as u32)
}

fn deserialize_calories<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.and_then(round_calories))
}

pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub calories: Option<u32>,
    pub prep_time: String,
    pub detected_ingredients: Vec<String>,
    pub is_meal_analysis: bool,
}

impl Recipe {
    pub fn new(recipe: NewRecipe, created_at: DateTime<Utc>) -> Self {
        Self {
            id: generate_uuid_v7().to_string(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            calories: recipe.calories,
            prep_time: recipe.prep_time,
            detected_ingredients: recipe.detected_ingredients,
            timestamp: created_at.timestamp_millis(),
            is_meal_analysis: recipe.is_meal_analysis,
        }
    }

    /// A recipe is usable only with a title, ingredients and steps.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && self.ingredients.iter().any(|i| !i.trim().is_empty())
            && self.steps.iter().any(|s| !s.trim().is_empty())
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }

    /// Substitutes are offered only for generated recipes, not analyzed meals.
    pub fn offers_substitutes(&self) -> bool {
        !self.is_meal_analysis
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stored(calories: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "r1",
            "title": "Kofta",
            "ingredients": ["beef"],
            "steps": ["grill"],
            "calories": calories,
            "prepTime": "30 min",
            "timestamp": 1_700_000_000_000i64
        })
    }

    #[test]
    fn test_fractional_calories_are_rounded_on_load() {
        let recipe: Recipe = serde_json::from_value(stored(json!(320.5))).unwrap();
        assert_eq!(recipe.calories, Some(321));

        let recipe: Recipe = serde_json::from_value(stored(json!(410))).unwrap();
        assert_eq!(recipe.calories, Some(410));
    }

    #[test]
    fn test_null_or_negative_calories_load_as_none() {
        let recipe: Recipe = serde_json::from_value(stored(json!(null))).unwrap();
        assert_eq!(recipe.calories, None);

        let recipe: Recipe = serde_json::from_value(stored(json!(-5))).unwrap();
        assert_eq!(recipe.calories, None);

        let mut missing = stored(json!(0));
        missing.as_object_mut().unwrap().remove("calories");
        let recipe: Recipe = serde_json::from_value(missing).unwrap();
        assert_eq!(recipe.calories, None);
    }

    #[test]
    fn test_completeness() {
        let complete: Recipe = serde_json::from_value(stored(json!(100))).unwrap();
        assert!(complete.is_complete());

        let empty = Recipe {
            title: " ".to_string(),
            ..complete.clone()
        };
        assert!(!empty.is_complete());

        let no_steps = Recipe {
            steps: vec![],
            ..complete
        };
        assert!(!no_steps.is_complete());
    }
}
