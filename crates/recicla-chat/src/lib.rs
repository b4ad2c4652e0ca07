//! Rule-based conversational engine for recycling guidance.
//!
//! A user message flows through three stages: the classifier maps it to an
//! [`Intent`] by ordered keyword containment, the response generator turns
//! the intent into a [`Reply`] (immediate text or a deferred location
//! lookup), and the controller appends both sides of the exchange to an
//! append-only transcript after a short artificial delay.

pub mod classifier;
pub mod controller;
pub mod knowledge;
pub mod markup;
pub mod response;

pub use classifier::{classify, Intent};
pub use controller::{ChatController, Transcript, TranscriptSink};
pub use markup::to_html;
pub use response::{Reply, ResponseGenerator};
