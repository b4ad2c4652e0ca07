//! Shared foundation for the Recicla workspace.
//!
//! Holds the domain types common to every crate (transcript messages,
//! material categories), the top-level error type, and the TOML
//! configuration including the persisted theme preference.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ReciclaConfig, ThemeMode};
pub use error::{ReciclaError, Result};
pub use types::{Material, Message, Sender};
