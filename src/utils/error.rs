use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Backend returned {status}: {message}")]
    BackendError { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
