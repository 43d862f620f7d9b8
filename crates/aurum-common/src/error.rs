use thiserror::Error;

/// Common error types for the Aurum wallet backend
#[derive(Error, Debug)]
pub enum AurumError {
    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Serialization error: {0}")]
    Serialization(Box<serde_json::Error>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid chain: {0}")]
    InvalidChain(String),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Result type alias for Aurum operations
pub type Result<T> = std::result::Result<T, AurumError>;

impl From<reqwest::Error> for AurumError {
    fn from(err: reqwest::Error) -> Self {
        AurumError::Http(Box::new(err))
    }
}

impl From<serde_json::Error> for AurumError {
    fn from(err: serde_json::Error) -> Self {
        AurumError::Serialization(Box::new(err))
    }
}

impl From<eyre::Error> for AurumError {
    fn from(err: eyre::Error) -> Self {
        AurumError::Generic(err.to_string())
    }
}
