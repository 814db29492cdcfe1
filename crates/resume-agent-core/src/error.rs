use thiserror::Error;

/// Failure reported by the vendor side of a call. Always surfaced to callers
/// wrapped in [`ProviderError`], never on its own.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("provider returned invalid response: {0}")]
    InvalidResponse(String),

    #[error("provider API error: status={status}, body={body}")]
    Api { status: u16, body: String },

    #[error("worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Azure OpenAI API key is missing")]
    MissingApiKey,

    #[error("Azure OpenAI endpoint is missing")]
    MissingEndpoint,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("Azure OpenAI - error generating response: {0}")]
    Generation(#[source] VendorError),

    #[error("Azure OpenAI - error generating embedding: {0}")]
    Embedding(#[source] VendorError),
}

impl ProviderError {
    pub const fn is_misconfiguration(&self) -> bool {
        matches!(
            self,
            Self::MissingApiKey | Self::MissingEndpoint | Self::Config(_)
        )
    }
}
