use async_trait::async_trait;

use resume_agent_core::ProviderError;

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;
}
