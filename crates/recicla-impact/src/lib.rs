//! Environmental impact estimates for recycled material.
//!
//! The numbers are educational approximations, not science: fixed per-kg
//! factors per material, a flat baseline for unrecycled waste, and a
//! trees-per-kg-CO₂ equivalence. They exist to make quantities tangible.

use thiserror::Error;
use tracing::debug;

use recicla_core::ReciclaError;

/// Average CO₂ burden of one kg of unrecycled waste, used as the baseline
/// for the reduction percentage.
const BASELINE_CO2_PER_KG: f64 = 2.5;

/// Approximate CO₂ one tree absorbs per year, in kg.
const CO2_PER_TREE_KG: f64 = 20.0;

/// Floor for the tree equivalence so tiny quantities still show a non-zero
/// figure.
const MIN_TREES_EQUIVALENT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImpactError {
    #[error("quantity must be a positive number of kilograms")]
    InvalidQuantity,

    #[error("unknown material: {0}")]
    UnknownMaterial(String),
}

impl From<ImpactError> for ReciclaError {
    fn from(err: ImpactError) -> Self {
        ReciclaError::Impact(err.to_string())
    }
}

/// Materials the calculator has profiles for.
///
/// A distinct set from the chat materials: composting organics has a profile
/// here, while oil and medicine have no meaningful per-kg figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactMaterial {
    Plastic,
    Paper,
    Glass,
    Metal,
    Organic,
    Electronic,
}

struct ImpactProfile {
    /// kg of CO₂ avoided per kg recycled.
    co2_per_kg: f64,
    /// Energy saved versus virgin production, in percent.
    energy_saved_pct: f64,
    /// Water saved versus virgin production, in percent.
    water_saved_pct: f64,
    description: &'static str,
}

impl ImpactMaterial {
    pub const ALL: &'static [ImpactMaterial] = &[
        ImpactMaterial::Plastic,
        ImpactMaterial::Paper,
        ImpactMaterial::Glass,
        ImpactMaterial::Metal,
        ImpactMaterial::Organic,
        ImpactMaterial::Electronic,
    ];

    /// Parse a material keyword, accepting both accented and plain spellings.
    pub fn from_keyword(keyword: &str) -> Result<Self, ImpactError> {
        match keyword.trim().to_lowercase().as_str() {
            "plastico" | "plástico" => Ok(ImpactMaterial::Plastic),
            "papel" => Ok(ImpactMaterial::Paper),
            "vidro" => Ok(ImpactMaterial::Glass),
            "metal" => Ok(ImpactMaterial::Metal),
            "organico" | "orgânico" => Ok(ImpactMaterial::Organic),
            "eletronico" | "eletrônico" => Ok(ImpactMaterial::Electronic),
            other => Err(ImpactError::UnknownMaterial(other.to_string())),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            ImpactMaterial::Plastic => "plastico",
            ImpactMaterial::Paper => "papel",
            ImpactMaterial::Glass => "vidro",
            ImpactMaterial::Metal => "metal",
            ImpactMaterial::Organic => "organico",
            ImpactMaterial::Electronic => "eletronico",
        }
    }

    fn profile(self) -> ImpactProfile {
        match self {
            ImpactMaterial::Plastic => ImpactProfile {
                co2_per_kg: 2.5,
                energy_saved_pct: 75.0,
                water_saved_pct: 50.0,
                description: "A reciclagem de plástico reduz significativamente o uso de \
                              petróleo e energia.",
            },
            ImpactMaterial::Paper => ImpactProfile {
                co2_per_kg: 1.2,
                energy_saved_pct: 60.0,
                water_saved_pct: 80.0,
                description: "Reciclar papel salva árvores e reduz o consumo de água e energia.",
            },
            ImpactMaterial::Glass => ImpactProfile {
                co2_per_kg: 0.3,
                energy_saved_pct: 30.0,
                water_saved_pct: 50.0,
                description: "Vidro pode ser reciclado infinitamente sem perder qualidade.",
            },
            ImpactMaterial::Metal => ImpactProfile {
                co2_per_kg: 4.0,
                energy_saved_pct: 95.0,
                water_saved_pct: 40.0,
                description: "Reciclar metal economiza muita energia e reduz mineração.",
            },
            ImpactMaterial::Organic => ImpactProfile {
                co2_per_kg: 0.5,
                energy_saved_pct: 0.0,
                water_saved_pct: 30.0,
                description: "Compostagem reduz emissões de metano e cria adubo natural.",
            },
            ImpactMaterial::Electronic => ImpactProfile {
                co2_per_kg: 3.5,
                energy_saved_pct: 85.0,
                water_saved_pct: 60.0,
                description: "Reciclar eletrônicos recupera metais preciosos e reduz mineração.",
            },
        }
    }
}

/// Derived figures for one recycled quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactEstimate {
    pub material: ImpactMaterial,
    pub quantity_kg: f64,
    pub co2_avoided_kg: f64,
    /// Emission reduction versus the unrecycled baseline, capped at 100.
    pub reduction_percent: f64,
    pub trees_equivalent: f64,
    pub water_saved_liters: f64,
    pub energy_saved_percent: f64,
    pub description: &'static str,
}

impl ImpactEstimate {
    /// Headline lines as shown to the user.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!(
                "Você evitou {:.2} kg de CO₂, equivalente a {:.1} árvores plantadas!",
                self.co2_avoided_kg, self.trees_equivalent
            ),
            format!(
                "{} Economizou {:.1} litros de água.",
                self.description, self.water_saved_liters
            ),
            format!(
                "Seu impacto equivale a {:.1} árvores plantadas. Continue reciclando!",
                self.trees_equivalent
            ),
        ]
    }
}

/// Estimate the impact of recycling `quantity_kg` of a material.
///
/// The quantity must be finite and strictly positive.
pub fn estimate(material: ImpactMaterial, quantity_kg: f64) -> Result<ImpactEstimate, ImpactError> {
    if !quantity_kg.is_finite() || quantity_kg <= 0.0 {
        return Err(ImpactError::InvalidQuantity);
    }

    let profile = material.profile();
    let co2_avoided_kg = profile.co2_per_kg * quantity_kg;
    let baseline = quantity_kg * BASELINE_CO2_PER_KG;
    let reduction_percent = (co2_avoided_kg / baseline * 100.0).min(100.0);
    let trees_equivalent = (co2_avoided_kg / CO2_PER_TREE_KG).max(MIN_TREES_EQUIVALENT);
    let water_saved_liters = quantity_kg * profile.water_saved_pct / 100.0;

    debug!(
        material = material.keyword(),
        quantity_kg, co2_avoided_kg, "impact estimated"
    );

    Ok(ImpactEstimate {
        material,
        quantity_kg,
        co2_avoided_kg,
        reduction_percent,
        trees_equivalent,
        water_saved_liters,
        energy_saved_percent: profile.energy_saved_pct,
        description: profile.description,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // ---- parsing ----

    #[test]
    fn test_from_keyword_accepts_both_spellings() {
        assert_eq!(
            ImpactMaterial::from_keyword("plástico").unwrap(),
            ImpactMaterial::Plastic
        );
        assert_eq!(
            ImpactMaterial::from_keyword("plastico").unwrap(),
            ImpactMaterial::Plastic
        );
        assert_eq!(
            ImpactMaterial::from_keyword(" Eletrônico ").unwrap(),
            ImpactMaterial::Electronic
        );
    }

    #[test]
    fn test_from_keyword_rejects_unknown() {
        assert_eq!(
            ImpactMaterial::from_keyword("isopor"),
            Err(ImpactError::UnknownMaterial("isopor".to_string()))
        );
    }

    #[test]
    fn test_keyword_round_trips() {
        for material in ImpactMaterial::ALL {
            assert_eq!(
                ImpactMaterial::from_keyword(material.keyword()).unwrap(),
                *material
            );
        }
    }

    // ---- validation ----

    #[test]
    fn test_estimate_rejects_non_positive_quantity() {
        assert_eq!(
            estimate(ImpactMaterial::Paper, 0.0),
            Err(ImpactError::InvalidQuantity)
        );
        assert_eq!(
            estimate(ImpactMaterial::Paper, -1.0),
            Err(ImpactError::InvalidQuantity)
        );
        assert_eq!(
            estimate(ImpactMaterial::Paper, f64::NAN),
            Err(ImpactError::InvalidQuantity)
        );
    }

    // ---- arithmetic ----

    #[test]
    fn test_plastic_ten_kg() {
        let est = estimate(ImpactMaterial::Plastic, 10.0).unwrap();
        assert!(close(est.co2_avoided_kg, 25.0));
        // Plastic matches the baseline exactly, so the reduction caps at 100.
        assert!(close(est.reduction_percent, 100.0));
        assert!(close(est.trees_equivalent, 1.25));
        assert!(close(est.water_saved_liters, 5.0));
    }

    #[test]
    fn test_metal_reduction_caps_at_hundred_percent() {
        // Metal avoids more CO₂ than the baseline assumes was emitted.
        let est = estimate(ImpactMaterial::Metal, 2.0).unwrap();
        assert!(close(est.co2_avoided_kg, 8.0));
        assert!(close(est.reduction_percent, 100.0));
    }

    #[test]
    fn test_glass_partial_reduction() {
        let est = estimate(ImpactMaterial::Glass, 5.0).unwrap();
        assert!(close(est.co2_avoided_kg, 1.5));
        assert!(close(est.reduction_percent, 12.0));
    }

    #[test]
    fn test_trees_equivalent_has_floor() {
        let est = estimate(ImpactMaterial::Glass, 0.5).unwrap();
        assert!(close(est.trees_equivalent, 0.1));
    }

    #[test]
    fn test_organic_saves_no_energy() {
        let est = estimate(ImpactMaterial::Organic, 3.0).unwrap();
        assert!(close(est.energy_saved_percent, 0.0));
        assert!(close(est.water_saved_liters, 0.9));
    }

    // ---- presentation ----

    #[test]
    fn test_summary_lines() {
        let est = estimate(ImpactMaterial::Paper, 4.0).unwrap();
        let [co2_line, material_line, world_line] = est.summary_lines();
        assert_eq!(
            co2_line,
            "Você evitou 4.80 kg de CO₂, equivalente a 0.2 árvores plantadas!"
        );
        assert!(material_line.starts_with("Reciclar papel salva árvores"));
        assert!(material_line.ends_with("Economizou 3.2 litros de água."));
        assert_eq!(
            world_line,
            "Seu impacto equivale a 0.2 árvores plantadas. Continue reciclando!"
        );
    }

    #[test]
    fn test_error_converts_to_workspace_error() {
        let err: ReciclaError = ImpactError::InvalidQuantity.into();
        assert!(matches!(err, ReciclaError::Impact(_)));
    }
}
