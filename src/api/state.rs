use std::sync::Arc;

use crate::config::Config;
use crate::services::catalog::{tmdb::TmdbProvider, CatalogProvider};
use crate::services::classifier::llm::{HttpLlmClient, LlmClient};

/// Shared application state: the outbound providers, cheap to clone per
/// request. No mutable state is shared between requests.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub llm: Option<Arc<dyn LlmClient>>,
}

impl AppState {
    /// Wires live providers from the process configuration. The generative
    /// client is only constructed when a key is present; without one the
    /// classifier runs its deterministic strategy exclusively.
    pub fn from_config(config: &Config) -> Self {
        let catalog: Arc<dyn CatalogProvider> = Arc::new(TmdbProvider::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
        ));

        let llm: Option<Arc<dyn LlmClient>> = match &config.llm_api_key {
            Some(key) => Some(Arc::new(HttpLlmClient::new(
                config.llm_api_url.clone(),
                key.clone(),
                config.llm_model.clone(),
            ))),
            None => {
                tracing::warn!(
                    "No generative API key configured, mood analysis will be deterministic only"
                );
                None
            }
        };

        Self { catalog, llm }
    }

    /// Builds state around explicit providers
    pub fn with_providers(
        catalog: Arc<dyn CatalogProvider>,
        llm: Option<Arc<dyn LlmClient>>,
    ) -> Self {
        Self { catalog, llm }
    }
}
