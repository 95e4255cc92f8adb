/// Unified error type for the partner pipeline
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PartnerError {
    // Backing data errors
    #[error("Data source '{source_name}' failed: {message}")]
    DataSource {
        source_name: String,
        message: String,
    },

    // Composition errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Dataset errors
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for compatibility
    #[error("{0}")]
    Other(String),
}

/// Result type alias using PartnerError
pub type Result<T> = std::result::Result<T, PartnerError>;

impl PartnerError {
    /// Create a data source error
    pub fn data_source(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataSource {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<String> for PartnerError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}

impl From<&str> for PartnerError {
    fn from(msg: &str) -> Self {
        Self::Other(msg.to_string())
    }
}

impl From<serde_json::Error> for PartnerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
