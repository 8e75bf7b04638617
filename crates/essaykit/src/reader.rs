//! The reader pipeline: fetch, extract, format
//!
//! [`Reader`] is the configured pipeline object. Build one per configuration
//! and call [`Reader::read`] once per essay view; the fetch is the pipeline's
//! single suspension point, extraction and formatting are synchronous.

use crate::client::{fetch_page, FetchOptions};
use crate::error::EssayError;
use crate::format::{format_essay, read_minutes, word_count};
use crate::rules::RuleRegistry;
use crate::types::{EssayRef, FormattedEssay};

/// Builder for configuring a Reader
#[derive(Default)]
pub struct ReaderBuilder {
    user_agent: Option<String>,
    rules: Option<RuleRegistry>,
}

impl ReaderBuilder {
    /// Create a new reader builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Replace the default extraction rules
    pub fn rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Build the reader
    pub fn build(self) -> Reader {
        Reader {
            options: FetchOptions {
                user_agent: self.user_agent,
            },
            rules: self.rules.unwrap_or_else(RuleRegistry::with_defaults),
        }
    }
}

/// Configured fetch-extract-format pipeline
pub struct Reader {
    options: FetchOptions,
    rules: RuleRegistry,
}

impl Default for Reader {
    fn default() -> Self {
        ReaderBuilder::new().build()
    }
}

impl Reader {
    /// Create a new reader builder
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    /// Read one catalog essay
    pub async fn read(&self, essay: &EssayRef) -> Result<FormattedEssay, EssayError> {
        self.read_url(essay.title, essay.url).await
    }

    /// Read an essay from an arbitrary URL
    ///
    /// On fetch failure the extractor is not invoked and the error is
    /// returned as-is. An extraction that matches nothing still formats,
    /// yielding a title-and-footer-only document.
    pub async fn read_url(&self, title: &str, url: &str) -> Result<FormattedEssay, EssayError> {
        let page = fetch_page(url, &self.options).await?;
        let text = self.rules.extract(&page.url, &page.body);
        let words = word_count(&text);

        Ok(FormattedEssay {
            title: title.to_string(),
            url: url.to_string(),
            markdown: format_essay(&text, title),
            word_count: words,
            read_minutes: read_minutes(words),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_invalid_scheme() {
        let reader = Reader::default();
        let result = reader.read_url("T", "ftp://example.com/essay.html").await;
        assert!(matches!(result, Err(EssayError::InvalidUrlScheme)));
    }

    #[tokio::test]
    async fn test_read_missing_url() {
        let reader = Reader::default();
        let result = reader.read_url("T", "").await;
        assert!(matches!(result, Err(EssayError::MissingUrl)));
    }

    #[test]
    fn test_builder_defaults() {
        let reader = Reader::builder().build();
        assert!(reader.options.user_agent.is_none());
    }

    #[test]
    fn test_builder_user_agent() {
        let reader = Reader::builder().user_agent("EssayBot/1.0").build();
        assert_eq!(reader.options.user_agent.as_deref(), Some("EssayBot/1.0"));
    }
}
