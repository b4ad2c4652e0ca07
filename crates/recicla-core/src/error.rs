use thiserror::Error;

/// Top-level error type for the Recicla system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for ReciclaError`
/// so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReciclaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("Impact error: {0}")]
    Impact(String),

    #[error("Quiz error: {0}")]
    Quiz(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for ReciclaError {
    fn from(err: toml::de::Error) -> Self {
        ReciclaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ReciclaError {
    fn from(err: toml::ser::Error) -> Self {
        ReciclaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ReciclaError {
    fn from(err: serde_json::Error) -> Self {
        ReciclaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Recicla operations.
pub type Result<T> = std::result::Result<T, ReciclaError>;
