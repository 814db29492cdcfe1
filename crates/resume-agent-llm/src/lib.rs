pub mod config;
pub mod factory;
pub mod providers;
pub mod traits;
pub mod types;

pub use config::*;
pub use factory::*;
pub use providers::AzureOpenAiProvider;
pub use resume_agent_core::ProviderError;
pub use traits::*;
pub use types::*;
