use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use visionchef_core::domain::proxy::ports::ProxyService;

use crate::application::http::{
    proxy::validators::ForwardPromptValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForwardPromptResponse {
    /// Raw text produced by the model.
    pub text: String,
}

#[utoipa::path(
    post,
    path = "/prompt",
    tag = "proxy",
    summary = "Forward a prompt to the model",
    description = "Sends the prompt (and optional inline image) to Gemini with the server-side API key and returns the generated text unchanged.",
    request_body = ForwardPromptValidator,
    responses(
        (status = 200, body = ForwardPromptResponse),
        (status = 400, description = "Missing prompt or malformed body", body = ErrorBody),
        (status = 500, description = "Model call failed", body = ErrorBody)
    )
)]
pub async fn forward_prompt(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ForwardPromptValidator>,
) -> Result<Response<ForwardPromptResponse>, ApiError> {
    let text = state
        .service
        .forward_prompt(payload.into())
        .await
        .map_err(|e| {
            tracing::error!("Prompt forwarding failed: {}", e);
            ApiError::from(e)
        })?;

    Ok(Response::OK(ForwardPromptResponse { text }))
}
