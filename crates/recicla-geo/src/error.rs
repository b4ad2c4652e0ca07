//! Failure taxonomy for the position-reporting capability.

use recicla_core::ReciclaError;
use thiserror::Error;

/// Failure kinds a position-reporting capability can report.
///
/// All variants are non-fatal: the lookup adapter converts every one into a
/// user-facing explanation with fallback links, and nothing propagates to
/// the conversation controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("permission to read the device position was denied")]
    PermissionDenied,

    #[error("device position is unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for the device position")]
    Timeout,

    #[error("unknown position error: {0}")]
    Unknown(String),
}

impl From<PositionError> for ReciclaError {
    fn from(err: PositionError) -> Self {
        ReciclaError::Location(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PositionError::PermissionDenied.to_string(),
            "permission to read the device position was denied"
        );
        assert_eq!(
            PositionError::PositionUnavailable.to_string(),
            "device position is unavailable"
        );
        assert_eq!(
            PositionError::Timeout.to_string(),
            "timed out waiting for the device position"
        );
        assert_eq!(
            PositionError::Unknown("boom".to_string()).to_string(),
            "unknown position error: boom"
        );
    }

    #[test]
    fn test_conversion_to_recicla_error() {
        let err: ReciclaError = PositionError::Timeout.into();
        assert!(matches!(err, ReciclaError::Location(_)));
        assert!(err.to_string().contains("timed out"));
    }
}
