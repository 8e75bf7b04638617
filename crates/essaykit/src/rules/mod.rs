//! Extraction rules for locating article text in page markup
//!
//! Design: each rule pairs a source URL pattern with a selector and text-join
//! policy. RuleRegistry dispatches to the first matching rule.

mod paul_graham;
mod readable;

pub use paul_graham::PaulGrahamRule;
pub use readable::ReadableRule;

use scraper::Html;
use url::Url;

/// A per-source content extraction rule
///
/// Implement this trait to support a new source's markup convention. Each
/// rule declares which URLs it covers via `matches()` and pulls the article
/// text out of the parsed document via `extract()`.
///
/// Extraction is infallible: a rule that finds nothing yields an empty
/// string, and the caller renders degraded output rather than an error.
pub trait ExtractionRule: Send + Sync {
    /// Unique identifier for this rule (for logging/debugging)
    fn name(&self) -> &'static str;

    /// Returns true if this rule covers the given source URL
    ///
    /// Called by the registry to decide which rule to use. More specific
    /// rules should be registered before generic ones.
    fn matches(&self, url: &Url) -> bool;

    /// Extract article text from the parsed document, in document order
    fn extract(&self, document: &Html) -> String;
}

/// Registry of extraction rules that dispatches to the appropriate handler
///
/// Maintains an ordered list of rules. When extracting, iterates through
/// rules and uses the first one that matches the source URL.
pub struct RuleRegistry {
    rules: Vec<Box<dyn ExtractionRule>>,
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with default rules pre-registered
    ///
    /// Includes (in order of priority):
    /// 1. PaulGrahamRule - legacy table layout on paulgraham.com
    /// 2. ReadableRule - readable-content fallback for all remaining URLs
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // Register site-specific rules first (higher priority)
        registry.register(Box::new(PaulGrahamRule::new()));
        // Fallback rule last (catches all remaining URLs)
        registry.register(Box::new(ReadableRule::new()));
        registry
    }

    /// Register a rule
    ///
    /// Rules are checked in registration order, so register more specific
    /// rules before generic ones.
    pub fn register(&mut self, rule: Box<dyn ExtractionRule>) {
        self.rules.push(rule);
    }

    /// Extract article text from an HTML body
    ///
    /// Parses the body and dispatches to the first rule matching the source
    /// URL. Non-HTML input harmlessly no-matches, yielding an empty string.
    pub fn extract(&self, source_url: &str, html: &str) -> String {
        let Ok(url) = Url::parse(source_url) else {
            return String::new();
        };

        let document = Html::parse_document(html);
        for rule in &self.rules {
            if rule.matches(&url) {
                tracing::debug!(rule = rule.name(), url = %source_url, "Using extraction rule");
                return normalize_whitespace(&rule.extract(&document));
            }
        }

        // No rule matched (cannot happen with ReadableRule registered)
        String::new()
    }
}

/// Collapse space runs, cap consecutive newlines at two, and trim
///
/// Blank-line paragraph boundaries come out as exactly two newlines, which is
/// what the formatter splits on.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    let mut result = String::new();
    let mut last_was_space = false;
    let mut newline_count = 0;

    for c in s.chars() {
        if c == '\n' {
            if last_was_space && result.ends_with(' ') {
                result.pop();
            }
            newline_count += 1;
            last_was_space = true;
            if newline_count <= 2 {
                result.push(c);
            }
        } else if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            newline_count = 0;
            last_was_space = false;
            result.push(c);
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = RuleRegistry::with_defaults();
        assert_eq!(registry.rules.len(), 2);
        assert_eq!(registry.rules[0].name(), "paul_graham");
        assert_eq!(registry.rules[1].name(), "readable");
    }

    #[test]
    fn test_empty_registry() {
        let registry = RuleRegistry::new();
        assert!(registry.rules.is_empty());
        assert_eq!(registry.extract("http://example.com/", "<p>text</p>"), "");
    }

    #[test]
    fn test_dispatch_to_site_rule() {
        let registry = RuleRegistry::with_defaults();
        let html = "<table><tr><td><table><tr><td><font>Essay body</font></td></tr></table></td></tr></table>";
        let text = registry.extract("http://www.paulgraham.com/start.html", html);
        assert_eq!(text, "Essay body");
    }

    #[test]
    fn test_dispatch_to_fallback() {
        let registry = RuleRegistry::with_defaults();
        let html = "<article><p>General article text</p></article>";
        let text = registry.extract("https://example.com/post", html);
        assert_eq!(text, "General article text");
    }

    #[test]
    fn test_non_html_input_yields_empty() {
        let registry = RuleRegistry::with_defaults();
        assert_eq!(
            registry.extract("http://www.paulgraham.com/start.html", "{\"json\": true}"),
            ""
        );
    }

    #[test]
    fn test_invalid_source_url_yields_empty() {
        let registry = RuleRegistry::with_defaults();
        assert_eq!(registry.extract("not a url", "<p>text</p>"), "");
    }

    #[test]
    fn test_normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("  hello   world  "), "hello world");
    }

    #[test]
    fn test_normalize_whitespace_caps_newlines() {
        assert_eq!(normalize_whitespace("one\n\n\n\n\ntwo"), "one\n\ntwo");
    }

    #[test]
    fn test_normalize_whitespace_keeps_blank_line_with_spaces() {
        // A "blank" line containing spaces still separates paragraphs
        assert_eq!(normalize_whitespace("one\n   \ntwo"), "one\n\ntwo");
    }
}
