//! Generic readable-content fallback rule
//!
//! For sources without a dedicated rule: prefer a main-content container when
//! one exists, then collect block-level text joined with blank lines so the
//! formatter sees paragraph boundaries.

use crate::rules::ExtractionRule;
use scraper::{Html, Selector};
use url::Url;

/// Containers likely to hold the main article, most specific first
const CONTAINER_SELECTORS: &[&str] = &["article", "main", "[role='main']", "#content", ".content"];

/// Block-level elements whose text forms paragraphs
const BLOCK_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, li";

/// Readable-content fallback rule
///
/// Matches every URL; register it last.
pub struct ReadableRule {
    blocks: Selector,
}

impl ReadableRule {
    /// Create a new readable fallback rule
    pub fn new() -> Self {
        Self {
            blocks: Selector::parse(BLOCK_SELECTOR).expect("literal selector parses"),
        }
    }

    /// Collect block-level text, one paragraph per block
    fn collect_blocks(&self, document: &Html) -> String {
        let mut paragraphs: Vec<String> = Vec::new();

        for element in document.select(&self.blocks) {
            let text: String = element.text().collect::<Vec<_>>().join(" ");
            let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !cleaned.is_empty() {
                paragraphs.push(cleaned);
            }
        }

        paragraphs.join("\n\n")
    }
}

impl Default for ReadableRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionRule for ReadableRule {
    fn name(&self) -> &'static str {
        "readable"
    }

    fn matches(&self, _url: &Url) -> bool {
        // Fallback rule matches all URLs
        true
    }

    fn extract(&self, document: &Html) -> String {
        // Prefer a recognized main-content container
        for selector_str in CONTAINER_SELECTORS {
            if let Ok(selector) = Selector::parse(selector_str) {
                if let Some(element) = document.select(&selector).next() {
                    let fragment = Html::parse_fragment(&element.html());
                    let text = self.collect_blocks(&fragment);
                    if !text.trim().is_empty() {
                        return text;
                    }
                }
            }
        }

        // No container found, collect from the whole document
        self.collect_blocks(document)
    }
}
