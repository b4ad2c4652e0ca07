//! Canned response copy and the venue-category knowledge table.
//!
//! All user-facing text lives here, in Brazilian Portuguese. Wording is an
//! external contract with existing users and must not be reworded casually;
//! tests pin the exact strings.

use recicla_core::types::Material;

pub const GREETING_REPLY: &str = "Olá! Como posso ajudar você com reciclagem hoje?";

pub const RECYCLING_GENERAL_REPLY: &str = "Reciclagem é o processo de transformar resíduos em \
     novos produtos. Separe os materiais por tipo: plástico, papel, vidro e metal.";

pub const TIPS_REPLY: &str = "Algumas dicas: 1) Separe os materiais corretamente, 2) Lave antes \
     de reciclar, 3) Reduza o consumo de embalagens, 4) Reutilize sempre que possível!";

pub const IMPACT_REPLY: &str = "A reciclagem reduz a poluição, economiza recursos naturais, \
     diminui o lixo em aterros e ajuda a combater as mudanças climáticas. Cada pessoa faz a \
     diferença!";

pub const SYMBOLS_REPLY: &str = "Os símbolos de reciclagem são números dentro de um triângulo. \
     PET (1), PEAD (2), PVC (3), PEBD (4), PP (5), PS (6) e outros (7). Verifique no produto!";

pub const ORGANIC_REPLY: &str = "Resíduos orgânicos podem ser compostados! Restos de frutas, \
     verduras e cascas de ovos podem virar adubo para plantas.";

pub const ELECTRONICS_REPLY: &str = "Pilhas, baterias e eletrônicos devem ser descartados em \
     pontos específicos de coleta. Nunca descarte no lixo comum - contêm materiais tóxicos!";

pub const FALLBACK_REPLIES: &[&str] = &[
    "Interessante! Pode me contar mais sobre o que você gostaria de saber sobre reciclagem?",
    "Posso ajudar com informações sobre reciclagem, dicas de separação, impacto ambiental e \
     muito mais. O que você gostaria de saber?",
    "Sou especialista em reciclagem! Posso ajudar com dicas, informações sobre materiais \
     recicláveis e práticas sustentáveis.",
    "Que ótimo! Estou aqui para ajudar você a reciclar melhor. Faça uma pergunta sobre \
     reciclagem!",
];

/// How to recycle one material.
pub fn material_recycling_reply(material: Material) -> &'static str {
    match material {
        Material::Plastic => {
            "Plásticos recicláveis incluem garrafas PET, embalagens de produtos de limpeza e \
             potes. Lave antes de descartar e verifique o símbolo de reciclagem."
        }
        Material::Paper => {
            "Papéis podem ser reciclados, mas evite papéis engordurados ou com fitas adesivas. \
             Revistas, jornais e caixas de papelão são recicláveis."
        }
        Material::Glass => {
            "Vidros são 100% recicláveis! Lave bem antes de descartar e remova tampas. Cuidado \
             com vidros quebrados - embale em jornal."
        }
        Material::Metal => {
            "Latas de alumínio e aço são totalmente recicláveis. Lave bem e amasse latas de \
             alumínio para economizar espaço."
        }
        _ => RECYCLING_GENERAL_REPLY,
    }
}

// =============================================================================
// Venue categories
// =============================================================================

/// A category of drop-off venue and what it accepts.
pub struct VenueCategory {
    pub name: &'static str,
    pub materials: &'static [&'static str],
    pub description: &'static str,
    /// Short form used in the numbered location overview.
    overview_line: &'static str,
}

pub static VENUE_CATEGORIES: &[VenueCategory] = &[
    VenueCategory {
        name: "Supermercados",
        materials: &["Plástico", "Papel", "Metal", "Vidro"],
        description: "Muitos supermercados têm pontos de coleta para embalagens recicláveis.",
        overview_line: "**Supermercados** - Muitos têm pontos de coleta para embalagens",
    },
    VenueCategory {
        name: "Cooperativas de Reciclagem",
        materials: &["Todos os materiais recicláveis"],
        description: "Cooperativas recebem materiais recicláveis e muitas vezes pagam por eles.",
        overview_line: "**Cooperativas de Reciclagem** - Recebem todos os materiais recicláveis",
    },
    VenueCategory {
        name: "Ecopontos",
        materials: &["Todos os materiais", "Eletrônicos", "Pilhas", "Óleo usado"],
        description: "Pontos específicos da prefeitura para coleta de diversos materiais.",
        overview_line: "**Ecopontos Municipais** - Pontos oficiais da prefeitura",
    },
    VenueCategory {
        name: "Farmácias",
        materials: &["Medicamentos vencidos", "Pilhas"],
        description: "Muitas farmácias recebem medicamentos vencidos e pilhas usadas.",
        overview_line: "**Farmácias** - Para medicamentos vencidos e pilhas",
    },
    VenueCategory {
        name: "Lojas de Eletrônicos",
        materials: &["Eletrônicos", "Baterias", "Pilhas"],
        description: "Lojas especializadas em eletrônicos geralmente recebem equipamentos antigos.",
        overview_line: "**Lojas de Eletrônicos** - Para equipamentos eletrônicos",
    },
    VenueCategory {
        name: "Postos de Combustível",
        materials: &["Óleo de cozinha usado"],
        description: "Alguns postos recebem óleo de cozinha usado para reciclagem.",
        overview_line: "**Postos de Combustível** - Alguns recebem óleo de cozinha",
    },
];

/// Numbered overview of venue categories plus a closing tip.
pub fn location_overview() -> String {
    let mut response = String::from("📍 **Onde encontrar pontos de reciclagem:**\n\n");
    for (index, venue) in VENUE_CATEGORIES.iter().enumerate() {
        response.push_str(&format!("{}. {}\n", index + 1, venue.overview_line));
    }
    response.push('\n');
    response.push_str(
        "💡 **Dica:** Procure no site da prefeitura da sua cidade por \"coleta seletiva\" ou \
         \"pontos de reciclagem\".",
    );
    response
}

/// Venue guidance for an address-style question, keyed by the material
/// mentioned in the message. Falls back to general guidance when no material
/// is named.
///
/// The keyword checks are this function's own, not [`Material::from_message`]:
/// "bateria" counts as electronics here, and check order matters for messages
/// naming several materials.
pub fn location_by_address(lower_message: &str) -> &'static str {
    let contains = |keywords: &[&str]| keywords.iter().any(|k| lower_message.contains(k));

    if contains(&["plástico", "pet"]) {
        return "🔄 **Para reciclar PLÁSTICO:**\n\n\
                📍 Supermercados (Carrefour, Extra, Pão de Açúcar)\n\
                📍 Cooperativas de reciclagem\n\
                📍 Ecopontos municipais\n\
                📍 Coleta seletiva porta a porta (verifique com a prefeitura)\n\n\
                💡 Procure no site da sua prefeitura por \"coleta seletiva\" ou ligue para o \
                serviço de limpeza urbana.";
    }
    if contains(&["papel", "papelão"]) {
        return "📄 **Para reciclar PAPEL:**\n\n\
                📍 Supermercados e mercados\n\
                📍 Cooperativas de catadores\n\
                📍 Escolas e universidades (muitas têm pontos de coleta)\n\
                📍 Ecopontos\n\n\
                💡 Papel limpo e seco tem mais valor para reciclagem!";
    }
    if contains(&["vidro"]) {
        return "🫙 **Para reciclar VIDRO:**\n\n\
                📍 Ecopontos municipais\n\
                📍 Cooperativas de reciclagem\n\
                📍 Alguns supermercados\n\
                📍 Vidraçarias (algumas recebem vidro para reciclagem)\n\n\
                💡 Vidro pode ser reciclado infinitamente! Lave bem antes de descartar.";
    }
    if contains(&["metal", "lata", "alumínio"]) {
        return "🥫 **Para reciclar METAL:**\n\n\
                📍 Cooperativas de reciclagem (pagam por alumínio)\n\
                📍 Ferros-velhos\n\
                📍 Ecopontos\n\
                📍 Supermercados\n\n\
                💡 Latas de alumínio têm alto valor de reciclagem!";
    }
    if contains(&["eletrônico", "eletrônic", "celular", "computador", "bateria"]) {
        return "🔌 **Para reciclar ELETRÔNICOS:**\n\n\
                📍 Lojas de eletrônicos (Magazine Luiza, Casas Bahia)\n\
                📍 Ecopontos especializados\n\
                📍 Empresas de reciclagem de eletrônicos\n\
                📍 Farmácias (para pilhas e baterias)\n\n\
                ⚠️ **Importante:** Nunca descarte eletrônicos no lixo comum! Contêm materiais \
                tóxicos.";
    }
    if contains(&["óleo", "oleo"]) {
        return "🛢️ **Para reciclar ÓLEO DE COZINHA:**\n\n\
                📍 Alguns postos de combustível\n\
                📍 Ecopontos\n\
                📍 Restaurantes e estabelecimentos comerciais\n\
                📍 Projetos ambientais locais\n\n\
                💡 1 litro de óleo pode contaminar 25.000 litros de água! Sempre recicle.";
    }
    if contains(&["medicamento", "remédio", "remedio"]) {
        return "💊 **Para descartar MEDICAMENTOS:**\n\n\
                📍 Farmácias (muitas recebem medicamentos vencidos)\n\
                📍 Unidades Básicas de Saúde (UBS)\n\
                📍 Postos de saúde\n\n\
                ⚠️ **Nunca** descarte medicamentos no lixo comum ou no vaso sanitário!";
    }

    "📍 **Encontre pontos de reciclagem próximos a você:**\n\n\
     1. **Site da Prefeitura** - Procure por \"coleta seletiva\" ou \"ecopontos\"\n\
     2. **Aplicativos:**\n   \
     • Cataki (conecta com catadores)\n   \
     • Rota da Reciclagem\n   \
     • Recicla Sampa (se estiver em SP)\n\
     3. **Google Maps** - Pesquise \"ponto de reciclagem\" ou \"ecoponto\"\n\
     4. **Telefone:** Ligue para a prefeitura e pergunte sobre coleta seletiva\n\n\
     💡 **Dica:** Muitas cidades têm coleta seletiva porta a porta. Verifique os dias e \
     horários na sua região!"
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_copy_is_pinned() {
        assert_eq!(
            GREETING_REPLY,
            "Olá! Como posso ajudar você com reciclagem hoje?"
        );
    }

    #[test]
    fn test_material_replies() {
        assert!(material_recycling_reply(Material::Plastic).contains("garrafas PET"));
        assert!(material_recycling_reply(Material::Paper).contains("papéis engordurados"));
        assert!(material_recycling_reply(Material::Glass).starts_with("Vidros são 100%"));
        assert!(material_recycling_reply(Material::Metal).contains("amasse latas"));
        assert_eq!(
            material_recycling_reply(Material::General),
            RECYCLING_GENERAL_REPLY
        );
    }

    #[test]
    fn test_fallbacks_are_four_distinct_replies() {
        assert_eq!(FALLBACK_REPLIES.len(), 4);
        for (i, a) in FALLBACK_REPLIES.iter().enumerate() {
            for b in &FALLBACK_REPLIES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_overview_numbers_all_venue_categories() {
        let overview = location_overview();
        assert!(overview.starts_with("📍 **Onde encontrar pontos de reciclagem:**\n\n"));
        assert!(overview.contains("1. **Supermercados** - Muitos têm pontos de coleta para embalagens\n"));
        assert!(overview.contains("6. **Postos de Combustível** - Alguns recebem óleo de cozinha\n"));
        assert!(overview.ends_with(
            "💡 **Dica:** Procure no site da prefeitura da sua cidade por \"coleta seletiva\" \
             ou \"pontos de reciclagem\"."
        ));
    }

    #[test]
    fn test_address_guidance_per_material() {
        assert!(location_by_address("plástico").starts_with("🔄 **Para reciclar PLÁSTICO:**"));
        assert!(location_by_address("pet").starts_with("🔄 **Para reciclar PLÁSTICO:**"));
        assert!(location_by_address("papelão").starts_with("📄 **Para reciclar PAPEL:**"));
        assert!(location_by_address("vidro").starts_with("🫙 **Para reciclar VIDRO:**"));
        assert!(location_by_address("lata").starts_with("🥫 **Para reciclar METAL:**"));
        assert!(location_by_address("celular").starts_with("🔌 **Para reciclar ELETRÔNICOS:**"));
        assert!(location_by_address("oleo").starts_with("🛢️ **Para reciclar ÓLEO DE COZINHA:**"));
        assert!(location_by_address("remedio").starts_with("💊 **Para descartar MEDICAMENTOS:**"));
    }

    #[test]
    fn test_address_guidance_battery_counts_as_electronics() {
        assert!(location_by_address("bateria").starts_with("🔌 **Para reciclar ELETRÔNICOS:**"));
    }

    #[test]
    fn test_address_guidance_general_fallback() {
        let general = location_by_address("no meu bairro");
        assert!(general.starts_with("📍 **Encontre pontos de reciclagem próximos a você:**"));
        assert!(general.contains("Cataki"));
    }
}
