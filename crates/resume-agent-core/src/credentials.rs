use std::fmt;

use crate::env::{
    AZURE_OPENAI_API_KEY, AZURE_OPENAI_API_VERSION, AZURE_OPENAI_ENDPOINT, Environment,
    OPENAI_API_KEY, OPENAI_API_VERSION,
};
use crate::error::ProviderError;
use crate::settings::Settings;

pub const DEFAULT_EMBEDDING_API_VERSION: &str = "2024-12-01-preview";

/// Values passed explicitly by the caller; they win over settings and env.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub endpoint: String,
    pub api_version: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish()
    }
}

/// Values are taken verbatim; only the empty string counts as unset.
pub fn first_non_empty<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn finish(
    api_key: Option<String>,
    endpoint: Option<String>,
    api_version: Option<String>,
) -> Result<Credentials, ProviderError> {
    let api_key = api_key.ok_or(ProviderError::MissingApiKey)?;
    let endpoint = endpoint.ok_or(ProviderError::MissingEndpoint)?;
    Ok(Credentials {
        api_key,
        endpoint,
        api_version,
    })
}

pub fn resolve_llm_credentials(
    explicit: &CredentialOverrides,
    settings: &Settings,
    env: &Environment,
) -> Result<Credentials, ProviderError> {
    let api_key = first_non_empty([
        explicit.api_key.as_deref(),
        settings.llm_api_key.as_deref(),
        env.get(AZURE_OPENAI_API_KEY),
    ]);
    let endpoint = first_non_empty([
        explicit.endpoint.as_deref(),
        settings.llm_base_url.as_deref(),
        env.get(AZURE_OPENAI_ENDPOINT),
    ]);
    let api_version = first_non_empty([
        explicit.api_version.as_deref(),
        env.get(AZURE_OPENAI_API_VERSION),
        env.get(OPENAI_API_VERSION),
    ]);
    let credentials = finish(api_key, endpoint, api_version)?;
    if credentials.api_version.is_none() {
        return Err(ProviderError::Config(
            "Azure OpenAI api version is missing".to_string(),
        ));
    }
    Ok(credentials)
}

pub fn resolve_embedding_credentials(
    explicit: &CredentialOverrides,
    settings: &Settings,
    env: &Environment,
) -> Result<Credentials, ProviderError> {
    let api_key = first_non_empty([
        explicit.api_key.as_deref(),
        settings.embedding_api_key.as_deref(),
        env.get(AZURE_OPENAI_API_KEY),
        env.get(OPENAI_API_KEY),
    ]);
    let endpoint = first_non_empty([
        explicit.endpoint.as_deref(),
        settings.embedding_base_url.as_deref(),
        settings.llm_base_url.as_deref(),
        env.get(AZURE_OPENAI_ENDPOINT),
    ]);
    let api_version = first_non_empty([
        explicit.api_version.as_deref(),
        env.get(AZURE_OPENAI_API_VERSION),
        Some(DEFAULT_EMBEDDING_API_VERSION),
    ]);
    finish(api_key, endpoint, api_version)
}
