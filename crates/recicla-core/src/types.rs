//! Domain types shared across the workspace.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Transcript messages
// =============================================================================

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation transcript.
///
/// Messages are immutable once created: the transcript is append-only and
/// insertion order is display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    /// Creation time as epoch seconds.
    pub timestamp: i64,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now().timestamp(),
        }
    }
}

// =============================================================================
// Materials
// =============================================================================

/// Recyclable material categories.
///
/// Used both as the sub-key of material-specific recycling intents and as
/// the filter key for nearby-point lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Plastic,
    Paper,
    Glass,
    Metal,
    Electronic,
    Oil,
    Medicine,
    General,
}

/// Keyword tests per material, in fixed priority order. The first material
/// whose keyword appears in the message wins.
const MATERIAL_KEYWORDS: &[(Material, &[&str])] = &[
    (Material::Plastic, &["plástico", "pet"]),
    (Material::Paper, &["papel", "papelão"]),
    (Material::Glass, &["vidro"]),
    (Material::Metal, &["metal", "lata", "alumínio"]),
    (Material::Electronic, &["eletrônic", "celular", "computador"]),
    (Material::Oil, &["óleo", "oleo"]),
    (Material::Medicine, &["medicamento", "remédio", "remedio"]),
];

impl Material {
    /// Derive a material filter from a free-text message.
    ///
    /// Lowercased keyword containment, evaluated in fixed order; messages
    /// naming no material map to [`Material::General`].
    pub fn from_message(text: &str) -> Self {
        let lower = text.to_lowercase();
        for (material, keywords) in MATERIAL_KEYWORDS {
            if keywords.iter().any(|k| lower.contains(k)) {
                return *material;
            }
        }
        Material::General
    }

    /// Display name as it appears in user-facing lists.
    pub fn display_name(self) -> &'static str {
        match self {
            Material::Plastic => "Plástico",
            Material::Paper => "Papel",
            Material::Glass => "Vidro",
            Material::Metal => "Metal",
            Material::Electronic => "Eletrônicos",
            Material::Oil => "Óleo de cozinha",
            Material::Medicine => "Medicamentos",
            Material::General => "Geral",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
