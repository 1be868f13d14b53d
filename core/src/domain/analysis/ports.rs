use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, proxy::value_objects::ForwardPromptInput,
};

/// Client-side transport to the prompt proxy
pub trait PromptGateway: Send + Sync {
    /// Sends one prompt and returns the model's text. Every transport or
    /// status failure comes back as [`CoreError::AnalysisFailed`].
    fn complete(
        &self,
        input: ForwardPromptInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
