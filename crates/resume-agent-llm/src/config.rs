use std::time::Duration;

use resume_agent_core::{ClientOptions, CredentialOverrides};
use serde_json::Value;

use crate::types::{GenerationOptions, MessageTemplate};

/// Explicit construction arguments. Unset credential fields fall back to
/// [`resume_agent_core::Settings`] and then the environment; an unset model
/// falls back to `Settings::ll_model`.
#[derive(Debug, Clone, Default)]
pub struct AzureOpenAiConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub options: GenerationOptions,
    pub template: MessageTemplate,
    pub client: ClientOptions,
}

impl AzureOpenAiConfig {
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

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options = self.options.with(name, value);
        self
    }

    pub fn with_user_message(mut self, user_message: impl Into<String>) -> Self {
        self.template = MessageTemplate::new(user_message);
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
pub enum TextProviderConfig {
    AzureOpenAi(AzureOpenAiConfig),
}
