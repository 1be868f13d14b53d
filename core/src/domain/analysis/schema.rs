use serde_json::json;

/// Returns the JSON schema for recipe replies
pub fn get_recipe_reply_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "steps": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "calories": { "type": "integer" },
                        "prepTime": { "type": "string" },
                        "detectedIngredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": ["title", "ingredients", "steps", "prepTime"]
                }
            }
        },
        "required": ["recipes"]
    })
}

/// Returns the JSON schema for ingredient substitution replies
pub fn get_substitutes_reply_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "substitutes": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["substitutes"]
    })
}
