use std::sync::Arc;

use resume_agent_core::{Environment, ProviderError, Settings};

use crate::config::EmbeddingProviderConfig;
use crate::providers::AzureOpenAiEmbeddingProvider;
use crate::traits::EmbeddingProvider;

pub fn build_embedding_provider(
    cfg: EmbeddingProviderConfig,
    settings: &Settings,
    env: &Environment,
) -> Result<Arc<dyn EmbeddingProvider>, ProviderError> {
    match cfg {
        EmbeddingProviderConfig::AzureOpenAi(c) => Ok(Arc::new(
            AzureOpenAiEmbeddingProvider::new(c, settings, env)?,
        )),
    }
}
