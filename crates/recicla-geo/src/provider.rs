//! The position-reporting capability boundary.

use async_trait::async_trait;

use crate::error::PositionError;

/// Geographic coordinates reported by the environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Options passed to the position-reporting capability.
#[derive(Debug, Clone, Copy)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    /// Upper bound on how long a position request may take.
    pub timeout_ms: u64,
    /// Maximum age of a cached position; zero forces a fresh reading.
    pub max_cache_age_ms: u64,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: 10_000,
            max_cache_age_ms: 0,
        }
    }
}

/// Environment-provided capability that asynchronously yields the caller's
/// geographic coordinates or a [`PositionError`].
///
/// The core only consumes this interface; a deployment without any provider
/// is handled gracefully by the lookup adapter.
#[async_trait]
pub trait PositionProvider: Send + Sync {
    async fn current_position(&self, options: &PositionOptions)
        -> Result<Position, PositionError>;
}

/// Provider that reports a fixed, preconfigured position.
///
/// Used when a deployment simulates the device capability (the terminal
/// application, tests).
pub struct FixedPositionProvider {
    position: Position,
}

impl FixedPositionProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: Position {
                latitude,
                longitude,
            },
        }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = PositionOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms, 10_000);
        assert_eq!(options.max_cache_age_ms, 0);
    }

    #[tokio::test]
    async fn test_fixed_provider_reports_configured_position() {
        let provider = FixedPositionProvider::new(-23.5, -46.6);
        let position = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap();
        assert!((position.latitude - -23.5).abs() < f64::EPSILON);
        assert!((position.longitude - -46.6).abs() < f64::EPSILON);
    }
}
