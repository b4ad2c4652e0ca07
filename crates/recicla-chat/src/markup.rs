//! Lightweight markup rendering for transcript text.
//!
//! Replies use a small markdown subset: `**bold**`, `[label](url)` links and
//! literal newlines. Rendering order is bold, then links, then line breaks.

use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex"));

/// Render reply markup to HTML.
///
/// Links open in a new browsing context and carry
/// `rel="noopener noreferrer"`.
pub fn to_html(text: &str) -> String {
    let rendered = BOLD.replace_all(text, "<strong>$1</strong>");
    let rendered = LINK.replace_all(
        &rendered,
        "<a href=\"$2\" target=\"_blank\" rel=\"noopener noreferrer\">$1</a>",
    );
    rendered.replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(to_html("**Dica:** lave antes"), "<strong>Dica:</strong> lave antes");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            to_html("[Google Maps](https://maps.example/q)"),
            "<a href=\"https://maps.example/q\" target=\"_blank\" rel=\"noopener noreferrer\">Google Maps</a>"
        );
    }

    #[test]
    fn test_line_breaks() {
        assert_eq!(to_html("a\nb\n\nc"), "a<br>b<br><br>c");
    }

    #[test]
    fn test_combined_in_order() {
        let html = to_html("**Pontos:**\n[mapa](https://m)");
        assert_eq!(
            html,
            "<strong>Pontos:</strong><br><a href=\"https://m\" target=\"_blank\" \
             rel=\"noopener noreferrer\">mapa</a>"
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(
            to_html("**a** e **b**"),
            "<strong>a</strong> e <strong>b</strong>"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(to_html("sem marcação"), "sem marcação");
    }
}
