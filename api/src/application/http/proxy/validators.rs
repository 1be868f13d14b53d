use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;
use visionchef_core::domain::proxy::value_objects::{ForwardPromptInput, InlineImage};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ForwardPromptValidator {
    #[validate(
        required(message = "Prompt is required"),
        length(min = 1, message = "Prompt is required")
    )]
    #[serde(default)]
    pub prompt: Option<String>,

    /// Optional photo sent to the model together with the prompt.
    #[serde(default)]
    pub image: Option<InlineImage>,

    /// JSON schema the model reply must follow.
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub response_schema: Option<serde_json::Value>,
}

impl From<ForwardPromptValidator> for ForwardPromptInput {
    fn from(payload: ForwardPromptValidator) -> Self {
        Self {
            prompt: payload.prompt.unwrap_or_default(),
            image: payload.image,
            response_schema: payload.response_schema,
        }
    }
}
