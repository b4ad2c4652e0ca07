//! Synthesized nearby-point candidates.
//!
//! The candidate list is illustrative: three kinds of collection point that
//! exist in most Brazilian cities, with placeholder distances drawn from a
//! bounded pseudo-random range per category. Distances are not measurements;
//! tests must assert ranges, never exact values.

use rand::Rng;

use recicla_core::types::Material;

use crate::links;
use crate::provider::Position;

/// Category of a synthesized candidate point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointCategory {
    Ecopoint,
    Supermarket,
    Cooperative,
}

/// An ephemeral nearby recycling point, synthesized per lookup and discarded
/// after formatting.
#[derive(Debug, Clone)]
pub struct RecyclingPoint {
    pub name: &'static str,
    pub category: PointCategory,
    pub materials_accepted: &'static [&'static str],
    pub distance_km: f64,
    pub address: &'static str,
    pub maps_link: String,
}

impl RecyclingPoint {
    /// Whether this point accepts a material, given its lowercased display
    /// name. All-materials entries always match.
    fn accepts(&self, material_lower: &str) -> bool {
        self.materials_accepted.iter().any(|accepted| {
            let accepted = accepted.to_lowercase();
            accepted.contains("todos os materiais") || accepted.contains(material_lower)
        })
    }
}

struct CandidateTemplate {
    name: &'static str,
    category: PointCategory,
    materials: &'static [&'static str],
    address: &'static str,
    map_query: &'static str,
    /// Bounds of the illustrative distance placeholder, in km.
    distance_range_km: (f64, f64),
}

static CANDIDATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Ecoponto Municipal",
        category: PointCategory::Ecopoint,
        materials: &["Todos os materiais"],
        address: "Verifique no site da prefeitura",
        map_query: "ecoponto",
        distance_range_km: (0.5, 2.5),
    },
    CandidateTemplate {
        name: "Supermercado - Ponto de Coleta",
        category: PointCategory::Supermarket,
        materials: &["Plástico", "Papel", "Metal", "Vidro"],
        address: "Verifique supermercados próximos",
        map_query: "supermercado+ponto+de+coleta",
        distance_range_km: (0.3, 1.8),
    },
    CandidateTemplate {
        name: "Cooperativa de Reciclagem",
        category: PointCategory::Cooperative,
        materials: &["Todos os materiais recicláveis"],
        address: "Verifique cooperativas locais",
        map_query: "cooperativa+reciclagem",
        distance_range_km: (1.0, 4.0),
    },
];

/// Synthesize the candidate list for a position, filter it by material, and
/// sort it ascending by distance.
///
/// [`Material::General`] keeps all candidates; any other material keeps only
/// points that accept it (all-materials entries or a case-insensitive
/// substring match on the material display name).
pub fn nearby_points(position: Position, material: Material) -> Vec<RecyclingPoint> {
    let mut rng = rand::thread_rng();

    let mut points: Vec<RecyclingPoint> = CANDIDATES
        .iter()
        .map(|template| RecyclingPoint {
            name: template.name,
            category: template.category,
            materials_accepted: template.materials,
            distance_km: rng
                .gen_range(template.distance_range_km.0..template.distance_range_km.1),
            address: template.address,
            maps_link: links::maps_search_link(template.map_query, position, 13),
        })
        .collect();

    if material != Material::General {
        let needle = material.display_name().to_lowercase();
        points.retain(|point| point.accepts(&needle));
    }

    points.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    points
}

// =============================================================================
// Tests
// =============================================================================
