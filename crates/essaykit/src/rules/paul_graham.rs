//! paulgraham.com extraction rule
//!
//! The essays use a legacy table layout: the article text lives in font
//! elements nested inside a table that is itself inside a table. The rule is
//! coupled to that one markup convention and yields nothing for any page
//! structured differently.

use crate::rules::ExtractionRule;
use scraper::{Html, Selector};
use url::Url;

/// Structural selector for the legacy essay layout
const ESSAY_SELECTOR: &str = "table table font";

/// Extraction rule for paulgraham.com essays
///
/// Matches `paulgraham.com` hosts and concatenates the text content of every
/// selector match in document order.
pub struct PaulGrahamRule {
    selector: Selector,
}

impl PaulGrahamRule {
    /// Create a new paulgraham.com rule
    pub fn new() -> Self {
        Self {
            selector: Selector::parse(ESSAY_SELECTOR).expect("literal selector parses"),
        }
    }
}

impl Default for PaulGrahamRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionRule for PaulGrahamRule {
    fn name(&self) -> &'static str {
        "paul_graham"
    }

    fn matches(&self, url: &Url) -> bool {
        matches!(
            url.host_str(),
            Some("paulgraham.com") | Some("www.paulgraham.com")
        )
    }

    fn extract(&self, document: &Html) -> String {
        let mut text = String::new();
        for element in document.select(&self.selector) {
            for piece in element.text() {
                text.push_str(piece);
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn test_matches_paulgraham_hosts() {
        let rule = PaulGrahamRule::new();

        let url = Url::parse("http://www.paulgraham.com/start.html").unwrap();
        assert!(rule.matches(&url));

        let url = Url::parse("http://paulgraham.com/ds.html").unwrap();
        assert!(rule.matches(&url));

        let url = Url::parse("https://example.com/start.html").unwrap();
        assert!(!rule.matches(&url));
    }

    #[test]
    fn test_extract_nested_table_font() {
        let rule = PaulGrahamRule::new();
        let html = r#"<html><body>
            <table><tr><td>
                <table><tr><td>
                    <font size="2">First paragraph.

Second paragraph.</font>
                </td></tr></table>
            </td></tr></table>
        </body></html>"#;

        let text = rule.extract(&parse(html));
        assert!(text.contains("First paragraph."));
        assert!(text.contains("Second paragraph."));
    }

    #[test]
    fn test_extract_document_order() {
        let rule = PaulGrahamRule::new();
        let html = r#"<table><tr><td><table><tr><td>
            <font>alpha</font>
            <font>beta</font>
        </td></tr></table></td></tr></table>"#;

        let text = rule.extract(&parse(html));
        let alpha = text.find("alpha").unwrap();
        let beta = text.find("beta").unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_extract_requires_double_nesting() {
        let rule = PaulGrahamRule::new();

        // font inside a single table does not match
        let html = "<table><tr><td><font>shallow</font></td></tr></table>";
        assert_eq!(rule.extract(&parse(html)), "");

        // font outside any table does not match
        let html = "<p><font>bare</font></p>";
        assert_eq!(rule.extract(&parse(html)), "");
    }

    #[test]
    fn test_extract_no_match_yields_empty() {
        let rule = PaulGrahamRule::new();
        let html = "<article><p>Modern markup</p></article>";
        assert_eq!(rule.extract(&parse(html)), "");
    }
}
