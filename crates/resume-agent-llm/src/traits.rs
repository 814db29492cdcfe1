use async_trait::async_trait;

use resume_agent_core::ProviderError;

use crate::types::GenerationArgs;

#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(
        &self,
        prompt: &str,
        generation_args: GenerationArgs,
    ) -> Result<String, ProviderError>;
}
