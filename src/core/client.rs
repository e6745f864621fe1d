use crate::domain::model::{ImageRef, RepoRequest};
use crate::domain::ports::ModelRegistry;
use crate::utils::error::{RegistryError, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

/// Header carrying the team API key on every backend call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Environment variable consulted when no `--api-key` flag was given.
pub const TEAM_API_KEY_VAR: &str = "TEAM_API_KEY";

/// `ModelRegistry` implementation backed by the platform's HTTP API.
pub struct HttpRegistry {
    base_url: String,
    client: Client,
}

impl HttpRegistry {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_credential(&self, request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
        let key = api_key
            .map(str::to_string)
            .or_else(|| std::env::var(TEAM_API_KEY_VAR).ok());

        match key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn read_json(response: Response) -> Result<Value> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistryError::BackendError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ModelRegistry for HttpRegistry {
    async fn list_host_machines(&self, api_key: Option<&str>) -> Result<Value> {
        let url = self.endpoint("sdk/inventory/hosts");
        tracing::debug!("Making API request to: {}", url);

        let request = self.with_credential(self.client.get(url), api_key);
        Self::read_json(request.send().await?).await
    }

    async fn list_functions(&self, verbose: bool, api_key: Option<&str>) -> Result<Value> {
        let url = self.endpoint("sdk/inventory/functions");
        tracing::debug!("Making API request to: {} (verbose={})", url, verbose);

        let request = self.client.get(url).query(&[("verbose", verbose)]);
        Self::read_json(self.with_credential(request, api_key).send().await?).await
    }

    async fn create_asset_repo(
        &self,
        request: &RepoRequest,
        api_key: Option<&str>,
    ) -> Result<Value> {
        let url = self.endpoint("sdk/models/register");
        tracing::debug!("Registering image repository '{}' at: {}", request.name, url);

        let request = self.client.post(url).json(request);
        Self::read_json(self.with_credential(request, api_key).send().await?).await
    }

    async fn asset_repo_login(&self, api_key: Option<&str>) -> Result<Value> {
        let url = self.endpoint("sdk/models/login");
        tracing::debug!("Making API request to: {}", url);

        let request = self.with_credential(self.client.post(url), api_key);
        Self::read_json(request.send().await?).await
    }

    async fn onboard_model(&self, image: &ImageRef, api_key: Option<&str>) -> Result<Value> {
        let url = self.endpoint(&format!("sdk/models/{}/onboard", image.model_id));
        tracing::debug!("Onboarding image {}@{} at: {}", image.image_tag, image.image_hash, url);

        let body = serde_json::json!({
            "image_tag": image.image_tag,
            "image_hash": image.image_hash,
        });
        let request = self.client.post(url).json(&body);
        Self::read_json(self.with_credential(request, api_key).send().await?).await
    }
}
