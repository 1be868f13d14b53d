use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    proxy::{
        ports::{LLMClient, ProxyService},
        value_objects::ForwardPromptInput,
    },
};

impl<LLM> ProxyService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, input), fields(prompt_len = input.prompt.len(), has_image = input.image.is_some()))]
    async fn forward_prompt(&self, input: ForwardPromptInput) -> Result<String, CoreError> {
        if input.prompt.is_empty() {
            return Err(CoreError::MissingPrompt);
        }

        let ForwardPromptInput {
            prompt,
            image,
            response_schema,
        } = input;

        let text = match image {
            Some(image) => {
                self.llm_client
                    .generate_with_image(prompt, image, response_schema)
                    .await?
            }
            None => {
                self.llm_client
                    .generate_with_text(prompt, response_schema)
                    .await?
            }
        };

        tracing::debug!(reply_len = text.len(), "model replied");
        Ok(text)
    }
}
