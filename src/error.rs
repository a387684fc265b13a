// Typed errors with thiserror. Only enable-time setup can fail; per-frame paths are total.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ArbiterError>;

/// Arbiter and plugin error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArbiterError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to create command `{0}`")]
    CommandCreation(String),

    #[error("Host state `{0}` not found")]
    StateNotFound(String),

    #[error("Logger already installed")]
    LoggerInstalled,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ArbiterError {
    fn from(err: serde_json::Error) -> Self {
        ArbiterError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ArbiterError::CommandCreation("stopzooming/allow_zoom_hold".to_string());
        assert!(err.to_string().contains("allow_zoom_hold"));
    }

    #[test]
    fn serde_errors_convert() {
        let err: ArbiterError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ArbiterError::Serialization(_)));
    }
}
