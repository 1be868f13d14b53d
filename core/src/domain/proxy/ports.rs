use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    proxy::value_objects::{ForwardPromptInput, InlineImage},
};

/// LLM Client trait for calling the hosted model
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: InlineImage,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Server-side prompt forwarding
pub trait ProxyService: Send + Sync {
    fn forward_prompt(
        &self,
        input: ForwardPromptInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
