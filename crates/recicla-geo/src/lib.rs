//! Nearby recycling-point lookup.
//!
//! Wraps an environment-provided asynchronous position-reporting capability
//! and turns positions (or failures) into formatted transcript text with
//! external map-service links.

pub mod error;
pub mod finder;
pub mod links;
pub mod points;
pub mod provider;

pub use error::PositionError;
pub use finder::{LocationFinder, SEARCHING_MESSAGE};
pub use points::{PointCategory, RecyclingPoint};
pub use provider::{FixedPositionProvider, Position, PositionOptions, PositionProvider};
