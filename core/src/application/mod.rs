pub mod chef_app;

pub use chef_app::{ChefApp, PendingAnalysis};

use crate::{
    domain::{
        analysis::services::AnalysisAdapter,
        common::{ClientConfig, VisionChefConfig, services::Service},
        state::services::StateStore,
    },
    infrastructure::{
        gateway::HttpPromptGateway, llm::GeminiLLMClient, storage::FileStatePersistence,
    },
};

pub type VisionChefService = Service<GeminiLLMClient>;

pub type ChefApplication = ChefApp<AnalysisAdapter<HttpPromptGateway>, FileStatePersistence>;

pub fn create_service(config: VisionChefConfig) -> VisionChefService {
    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is empty, model calls will be rejected upstream");
    }

    Service::new(GeminiLLMClient::new(config.llm))
}

pub fn create_chef_app(config: &ClientConfig) -> ChefApplication {
    let analysis = AnalysisAdapter::new(HttpPromptGateway::new(config.proxy_url.clone()));
    let store = StateStore::load(
        FileStatePersistence::new(config.data_dir.clone()),
        &config.storage_key,
    );

    ChefApp::new(analysis, store)
}
