use serde::{Deserialize, Serialize};

/// Parameters for registering a container image repository for a model.
/// Built once per invocation from the parsed flags and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRequest {
    pub name: String,
    pub hosting_machine: String,
    pub version: String,
    pub description: String,
    pub function: String,
    pub source_language: String,
}

/// A built container image to onboard as a usable model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub model_id: String,
    pub image_tag: String,
    pub image_hash: String,
}
