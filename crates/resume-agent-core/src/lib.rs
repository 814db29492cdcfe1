pub mod client;
pub mod credentials;
pub mod env;
pub mod error;
pub mod settings;

pub use client::*;
pub use credentials::*;
pub use env::Environment;
pub use error::{ProviderError, VendorError};
pub use settings::*;
