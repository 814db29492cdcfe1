pub mod config;
pub mod factory;
pub mod providers;
pub mod traits;

pub use config::*;
pub use factory::*;
pub use providers::AzureOpenAiEmbeddingProvider;
pub use resume_agent_core::ProviderError;
pub use traits::*;
