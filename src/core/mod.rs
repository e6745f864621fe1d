pub mod client;
pub mod dispatch;

pub use crate::domain::model::{ImageRef, RepoRequest};
pub use crate::domain::ports::ModelRegistry;
pub use crate::utils::error::Result;
