//! Intent to reply mapping.

use rand::seq::SliceRandom;
use tracing::debug;

use recicla_core::types::Material;

use crate::classifier::{self, Intent};
use crate::knowledge;

/// Outcome of generating a response to one user message.
///
/// A deferred reply means the final text depends on an asynchronous position
/// lookup; the caller owns emitting the interim notice and resolving the
/// lookup. There is no empty-text sentinel: absence of immediate text is a
/// variant, not a convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Immediate(String),
    Deferred { material: Material },
}

/// Stateless mapping from user messages to replies.
#[derive(Debug, Default)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, message: &str) -> Reply {
        let intent = classifier::classify(message);
        debug!(?intent, "classified message");

        let text = match intent {
            Intent::Greeting => knowledge::GREETING_REPLY.to_string(),
            Intent::RecyclingMaterial(material) => {
                knowledge::material_recycling_reply(material).to_string()
            }
            Intent::RecyclingGeneral => knowledge::RECYCLING_GENERAL_REPLY.to_string(),
            Intent::Tips => knowledge::TIPS_REPLY.to_string(),
            Intent::EnvironmentalImpact => knowledge::IMPACT_REPLY.to_string(),
            Intent::Symbols => knowledge::SYMBOLS_REPLY.to_string(),
            Intent::LocationNearby => {
                return Reply::Deferred {
                    material: Material::from_message(message),
                }
            }
            Intent::LocationByAddress => {
                knowledge::location_by_address(&message.to_lowercase()).to_string()
            }
            Intent::LocationOverview => knowledge::location_overview(),
            Intent::OrganicWaste => knowledge::ORGANIC_REPLY.to_string(),
            Intent::Electronics => knowledge::ELECTRONICS_REPLY.to_string(),
            Intent::Unmatched => {
                let mut rng = rand::thread_rng();
                knowledge::FALLBACK_REPLIES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or(knowledge::FALLBACK_REPLIES[0])
                    .to_string()
            }
        };

        Reply::Immediate(text)
    }
}

// =============================================================================
// Tests
// =============================================================================
