use crate::domain::proxy::ports::LLMClient;

/// Server-side service container. Business traits are implemented on it in
/// the owning domain module.
#[derive(Clone, Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
