use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::domain::{
    analysis::value_objects::{RecipeCandidate, RecipeReply, SubstitutesReply},
    common::entities::app_errors::CoreError,
    recipe::entities::{NewRecipe, Recipe, round_calories},
};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(.*?)\s*```").expect("code fence pattern is valid")
});

/// Returns the JSON payload of a reply, unwrapping a Markdown code fence if present.
pub fn extract_json_payload(reply: &str) -> &str {
    match CODE_FENCE.captures(reply).and_then(|c| c.get(1)) {
        Some(inner) => inner.as_str(),
        None => reply.trim(),
    }
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn coerce_calories(value: Option<serde_json::Value>) -> Option<u32> {
    match value? {
        serde_json::Value::Number(n) => n.as_f64().and_then(round_calories),
        // "1,200 kcal" and "1_200" both mean 1200.
        serde_json::Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '_')
                .filter(char::is_ascii_digit)
                .collect();
            digits.parse().ok()
        }
        _ => None,
    }
}

fn validate_candidate(
    index: usize,
    candidate: RecipeCandidate,
    is_meal_analysis: bool,
) -> Result<NewRecipe, CoreError> {
    let title = candidate.title.trim().to_string();
    let ingredients = clean_list(candidate.ingredients);
    let steps = clean_list(candidate.steps);

    if title.is_empty() {
        return Err(CoreError::MalformedReply(format!("recipe {index} has no title")));
    }
    if ingredients.is_empty() {
        return Err(CoreError::MalformedReply(format!("recipe {index} has no ingredients")));
    }
    if steps.is_empty() {
        return Err(CoreError::MalformedReply(format!("recipe {index} has no steps")));
    }

    Ok(NewRecipe {
        title,
        ingredients,
        steps,
        calories: coerce_calories(candidate.calories),
        prep_time: candidate.prep_time.unwrap_or_default().trim().to_string(),
        detected_ingredients: clean_list(candidate.detected_ingredients),
        is_meal_analysis,
    })
}

/// Parses a recipe reply. Either every recipe is valid or the whole reply is rejected.
pub fn parse_recipes(
    reply: &str,
    is_meal_analysis: bool,
    created_at: DateTime<Utc>,
) -> Result<Vec<Recipe>, CoreError> {
    let payload = extract_json_payload(reply);
    let parsed: RecipeReply = serde_json::from_str(payload).map_err(|e| {
        tracing::error!("Failed to parse recipe reply: {}", e);
        CoreError::MalformedReply(format!("Failed to parse recipe reply: {}", e))
    })?;

    let candidates = parsed.into_candidates();
    if candidates.is_empty() {
        return Err(CoreError::MalformedReply("reply contains no recipes".to_string()));
    }

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            validate_candidate(index, candidate, is_meal_analysis)
                .map(|recipe| Recipe::new(recipe, created_at))
        })
        .collect()
}

/// Parses a substitutes reply into an ordered list, dropping blank entries.
pub fn parse_substitutes(reply: &str) -> Result<Vec<String>, CoreError> {
    let payload = extract_json_payload(reply);
    let parsed: SubstitutesReply = serde_json::from_str(payload).map_err(|e| {
        tracing::error!("Failed to parse substitutes reply: {}", e);
        CoreError::MalformedReply(format!("Failed to parse substitutes reply: {}", e))
    })?;

    Ok(clean_list(parsed.into_items()))
}
