//! Nearby-point lookup over the position-reporting capability.
//!
//! The finder never returns an error to the conversation layer: every
//! outcome, including capability failures and deployments without any
//! provider at all, becomes formatted transcript text.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use recicla_core::types::Material;

use crate::error::PositionError;
use crate::links;
use crate::points::{self, RecyclingPoint};
use crate::provider::{Position, PositionOptions, PositionProvider};

/// Interim notice appended to the transcript before the position request
/// resolves.
pub const SEARCHING_MESSAGE: &str = "🔍 Buscando pontos de reciclagem próximos a você...";

/// Adapter between the conversation layer and a position-reporting
/// capability.
///
/// A finder without a provider models a deployment where the capability is
/// absent; [`LocationFinder::has_provider`] lets the caller short-circuit to
/// [`LocationFinder::unsupported_message`] without emitting the searching
/// notice.
pub struct LocationFinder {
    provider: Option<Arc<dyn PositionProvider>>,
    options: PositionOptions,
}

impl Default for LocationFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationFinder {
    /// Finder with no position capability.
    pub fn new() -> Self {
        Self {
            provider: None,
            options: PositionOptions::default(),
        }
    }

    pub fn with_provider(provider: Arc<dyn PositionProvider>) -> Self {
        Self {
            provider: Some(provider),
            options: PositionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Guidance shown when no position capability exists. No searching
    /// notice precedes this message.
    pub fn unsupported_message() -> String {
        "📍 Seu navegador não suporta geolocalização.\n\n\
         Você pode:\n\
         1. Usar o Google Maps e pesquisar \"ponto de reciclagem\" ou \"ecoponto\"\n\
         2. Verificar o site da prefeitura da sua cidade\n\
         3. Ligar para o serviço de limpeza urbana"
            .to_string()
    }

    /// Resolve a lookup to its final transcript text.
    ///
    /// Awaits the provider under the configured timeout, then formats either
    /// the nearby points for the position or an explanation of the failure.
    /// Infallible by construction: failures are content, not errors.
    pub async fn resolve(&self, material: Material) -> String {
        let provider = match &self.provider {
            Some(provider) => provider,
            None => return Self::unsupported_message(),
        };

        let deadline = Duration::from_millis(self.options.timeout_ms);
        let outcome = match tokio::time::timeout(deadline, provider.current_position(&self.options))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(PositionError::Timeout),
        };

        match outcome {
            Ok(position) => {
                debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    material = material.display_name(),
                    "position resolved"
                );
                let nearby = points::nearby_points(position, material);
                format_nearby(&nearby, position)
            }
            Err(err) => {
                warn!(error = %err, "position lookup failed");
                failure_message(&err)
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Render the sorted nearby points as a numbered transcript block with map
/// links, closing with general tips and a link centered on the position.
fn format_nearby(nearby: &[RecyclingPoint], position: Position) -> String {
    let mut response = String::from("📍 **Pontos de Reciclagem Próximos:**\n\n");

    for (index, point) in nearby.iter().enumerate() {
        response.push_str(&format!("{}. **{}**\n", index + 1, point.name));
        response.push_str(&format!("   📍 Distância: ~{:.1} km\n", point.distance_km));
        response.push_str(&format!(
            "   ♻️ Materiais: {}\n",
            point.materials_accepted.join(", ")
        ));
        response.push_str(&format!("   🔗 [Ver no Google Maps]({})\n\n", point.maps_link));
    }

    response.push_str("💡 **Dicas:**\n");
    response.push_str("• Abra o Google Maps e pesquise \"ponto de reciclagem\" ou \"ecoponto\"\n");
    response.push_str("• Verifique o site da prefeitura para ecopontos oficiais\n");
    response.push_str("• Muitas cidades têm coleta seletiva porta a porta\n\n");

    response.push_str(&format!(
        "🗺️ [Abrir Google Maps com sua localização]({})",
        links::maps_search_link("ponto+de+reciclagem", position, 14)
    ));

    response
}

/// Explain a position failure. Every variant carries actionable guidance and
/// a fallback map link.
fn failure_message(err: &PositionError) -> String {
    let mut message = String::from("❌ Não foi possível acessar sua localização.\n\n");

    match err {
        PositionError::PermissionDenied => {
            message.push_str("⚠️ **Permissão de localização negada.**\n\n");
            message.push_str("Para encontrar pontos próximos:\n");
            message.push_str(
                "1. Permita o acesso à localização nas configurações do navegador\n",
            );
            message.push_str(&format!(
                "2. Ou use o [Google Maps]({})\n",
                links::maps_fallback_link()
            ));
            message.push_str("3. Ou pesquise \"ecoponto\" + nome da sua cidade");
        }
        PositionError::PositionUnavailable => {
            message.push_str("⚠️ **Localização indisponível.**\n\n");
            message.push_str(&format!(
                "Tente usar o [Google Maps]({}) para encontrar pontos de reciclagem próximos.",
                links::maps_fallback_link()
            ));
        }
        PositionError::Timeout => {
            message.push_str("⏱️ **Tempo esgotado** ao buscar localização.\n\n");
            message.push_str(&format!(
                "Tente novamente ou use o [Google Maps]({}).",
                links::maps_fallback_link()
            ));
        }
        PositionError::Unknown(_) => {
            message.push_str("Erro desconhecido. Tente novamente.\n\n");
            message.push_str(&format!(
                "Ou use o [Google Maps]({}).",
                links::maps_fallback_link()
            ));
        }
    }

    message
}

// =============================================================================
// Tests
// =============================================================================
