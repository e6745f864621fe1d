use crate::domain::model::{ImageRef, RepoRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// The remote model hosting platform, one method per CLI subcommand.
///
/// Every method takes the caller's optional team API key; resolving a default
/// credential when none is given is the implementation's concern. Return
/// values are whatever the backend answered, to be rendered as-is.
#[async_trait]
pub trait ModelRegistry: Send + Sync {
    /// List hosting machines available for model deployment.
    async fn list_host_machines(&self, api_key: Option<&str>) -> Result<Value>;

    /// List model functions supported by the platform. `verbose` asks the
    /// backend for full function metadata instead of the short listing.
    async fn list_functions(&self, verbose: bool, api_key: Option<&str>) -> Result<Value>;

    /// Register a container image repository for a new model.
    async fn create_asset_repo(&self, request: &RepoRequest, api_key: Option<&str>)
        -> Result<Value>;

    /// Obtain login credentials for the image repository.
    async fn asset_repo_login(&self, api_key: Option<&str>) -> Result<Value>;

    /// Onboard a built image as a usable model.
    async fn onboard_model(&self, image: &ImageRef, api_key: Option<&str>) -> Result<Value>;
}
