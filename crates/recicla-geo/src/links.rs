//! External map-service deep links.
//!
//! The link shape is an opaque external contract:
//! `https://<map-service>/search/<query>/@<lat>,<lng>,<zoom>z` with
//! comma-separated coordinates and a trailing zoom-and-`z` suffix.

use crate::provider::Position;

const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search";

/// Build a map search link centered on a position.
pub fn maps_search_link(query: &str, position: Position, zoom: u8) -> String {
    format!(
        "{}/{}/@{},{},{}z",
        MAPS_SEARCH_BASE, query, position.latitude, position.longitude, zoom
    )
}

/// Plain map search without coordinates, used as the fallback link in
/// failure explanations.
pub fn maps_fallback_link() -> String {
    format!("{}/ponto+de+reciclagem", MAPS_SEARCH_BASE)
}
