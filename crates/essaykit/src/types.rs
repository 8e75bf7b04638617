//! Core types for Essaykit

use serde::Serialize;

/// A fetchable essay: title plus source URL
///
/// Catalog entries are compile-time constants; the URL doubles as the list
/// key and lives for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EssayRef {
    /// Display title, shown in the list view
    pub title: &'static str,
    /// Absolute HTTP(S) source URL
    pub url: &'static str,
}

/// Raw fetched page, alive between fetch and extraction
#[derive(Debug, Clone)]
pub struct Page {
    /// The fetched URL
    pub url: String,
    /// HTTP status code; the body is returned for any status
    pub status_code: u16,
    /// Content-Type header value
    pub content_type: Option<String>,
    /// Body size in bytes as read
    pub size: u64,
    /// True if the body read hit the total timeout
    pub truncated: bool,
    /// Response body as text
    pub body: String,
}

/// Display-ready essay content produced by the reader pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedEssay {
    /// Essay title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Rendered markdown: title heading, styled paragraphs, footer
    pub markdown: String,
    /// Whitespace-separated tokens in the raw extracted text
    pub word_count: usize,
    /// Estimated reading time, ceil(word_count / 200)
    pub read_minutes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_essay_ref_serialization() {
        let essay = EssayRef {
            title: "How to Start a Startup",
            url: "http://www.paulgraham.com/start.html",
        };
        let json = serde_json::to_string(&essay).unwrap();
        assert!(json.contains("\"title\":\"How to Start a Startup\""));
        assert!(json.contains("\"url\":\"http://www.paulgraham.com/start.html\""));
    }

    #[test]
    fn test_formatted_essay_serialization() {
        let essay = FormattedEssay {
            title: "T".to_string(),
            url: "http://example.com/t.html".to_string(),
            markdown: "# T".to_string(),
            word_count: 400,
            read_minutes: 2,
        };
        let json = serde_json::to_string(&essay).unwrap();
        assert!(json.contains("\"word_count\":400"));
        assert!(json.contains("\"read_minutes\":2"));
    }
}
