//! Keyword-containment intent classification.
//!
//! Rules are evaluated in a fixed priority order against the lowercased
//! message; the first rule with any matching keyword wins and no later rule
//! is consulted. Matching is plain substring containment, so short keywords
//! match inside longer words ("oi" inside "foi"). That looseness is part of
//! the contract: the classifier is deliberately forgiving rather than
//! precise.

use recicla_core::types::Material;

/// What the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    /// How to recycle one specific material.
    RecyclingMaterial(Material),
    /// What recycling is, in general.
    RecyclingGeneral,
    Tips,
    EnvironmentalImpact,
    Symbols,
    /// Points near the user's current position; resolves asynchronously.
    LocationNearby,
    /// Points in a named city, neighborhood, street or address.
    LocationByAddress,
    /// Where recycling points exist in general.
    LocationOverview,
    OrganicWaste,
    Electronics,
    Unmatched,
}

struct IntentRule {
    keywords: &'static [&'static str],
    resolve: fn(&str) -> Intent,
}

// Priority order is load-bearing: "como reciclar plástico" must hit the
// recycling rule, not the tips rule triggered by "como".
static RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["olá", "oi", "hello"],
        resolve: |_| Intent::Greeting,
    },
    IntentRule {
        keywords: &["reciclar", "reciclagem"],
        resolve: resolve_recycling,
    },
    IntentRule {
        keywords: &["dica", "como", "ajudar"],
        resolve: |_| Intent::Tips,
    },
    IntentRule {
        keywords: &["impacto", "meio ambiente", "benefício"],
        resolve: |_| Intent::EnvironmentalImpact,
    },
    IntentRule {
        keywords: &["símbolo", "código", "identificar"],
        resolve: |_| Intent::Symbols,
    },
    IntentRule {
        keywords: LOCATION_KEYWORDS,
        resolve: resolve_location,
    },
    IntentRule {
        keywords: &["orgânico", "comida", "resto"],
        resolve: |_| Intent::OrganicWaste,
    },
    IntentRule {
        keywords: &["pilha", "bateria", "eletrônico"],
        resolve: |_| Intent::Electronics,
    },
];

static LOCATION_KEYWORDS: &[&str] = &[
    "onde", "local", "coleta", "ponto", "lugar", "descarta", "próximo", "perto",
];

static PROXIMITY_KEYWORDS: &[&str] = &[
    "perto",
    "próximo",
    "minha localização",
    "localização",
    "gps",
    "onde estou",
];

static ADDRESS_KEYWORDS: &[&str] = &["cidade", "bairro", "rua", "endereço"];

/// Materials the recycling rule distinguishes, in check order.
static RECYCLING_MATERIALS: &[(&str, Material)] = &[
    ("plástico", Material::Plastic),
    ("papel", Material::Paper),
    ("vidro", Material::Glass),
    ("metal", Material::Metal),
];

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

fn resolve_recycling(lower: &str) -> Intent {
    for (keyword, material) in RECYCLING_MATERIALS {
        if lower.contains(keyword) {
            return Intent::RecyclingMaterial(*material);
        }
    }
    // "ponto de reciclagem perto de mim" is a location question that happens
    // to contain a recycling keyword; hand it to the location rule instead
    // of answering with the generic recycling explanation.
    if contains_any(lower, LOCATION_KEYWORDS) {
        return resolve_location(lower);
    }
    Intent::RecyclingGeneral
}

fn resolve_location(lower: &str) -> Intent {
    if contains_any(lower, PROXIMITY_KEYWORDS) {
        return Intent::LocationNearby;
    }
    if contains_any(lower, ADDRESS_KEYWORDS) {
        return Intent::LocationByAddress;
    }
    Intent::LocationOverview
}

/// Classify a raw user message.
pub fn classify(message: &str) -> Intent {
    let lower = message.to_lowercase();
    for rule in RULES {
        if contains_any(&lower, rule.keywords) {
            return (rule.resolve)(&lower);
        }
    }
    Intent::Unmatched
}

// =============================================================================
// Tests
// =============================================================================
