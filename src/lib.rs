pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{Cli, Commands};
pub use crate::core::client::HttpRegistry;
pub use crate::core::dispatch::dispatch;
pub use crate::domain::model::{ImageRef, RepoRequest};
pub use crate::domain::ports::ModelRegistry;
pub use crate::utils::error::{RegistryError, Result};
