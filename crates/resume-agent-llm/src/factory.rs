use std::sync::Arc;

use resume_agent_core::{Environment, ProviderError, Settings};

use crate::config::TextProviderConfig;
use crate::providers::AzureOpenAiProvider;
use crate::traits::TextProvider;

pub fn build_text_provider(
    cfg: TextProviderConfig,
    settings: &Settings,
    env: &Environment,
) -> Result<Arc<dyn TextProvider>, ProviderError> {
    match cfg {
        TextProviderConfig::AzureOpenAi(c) => {
            Ok(Arc::new(AzureOpenAiProvider::new(c, settings, env)?))
        }
    }
}
