use std::time::Duration;

use resume_agent_core::{ClientOptions, CredentialOverrides};

#[derive(Debug, Clone, Default)]
pub struct AzureOpenAiEmbeddingConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub client: ClientOptions,
}

impl AzureOpenAiEmbeddingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = ClientOptions::with_timeout(timeout);
        self
    }

    pub(crate) fn overrides(&self) -> CredentialOverrides {
        CredentialOverrides {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            api_version: self.api_version.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum EmbeddingProviderConfig {
    AzureOpenAi(AzureOpenAiEmbeddingConfig),
}
