pub use resume_agent_core::*;
pub use resume_agent_embed::{
    build_embedding_provider, AzureOpenAiEmbeddingConfig, AzureOpenAiEmbeddingProvider,
    EmbeddingProvider, EmbeddingProviderConfig,
};
pub use resume_agent_llm::{
    build_text_provider, AzureOpenAiConfig, AzureOpenAiProvider, ChatMessage, GenerationArgs,
    GenerationOptions, MessageTemplate, Role, SamplingParams, TextProvider, TextProviderConfig,
};
