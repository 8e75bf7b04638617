//! Essaykit - essay fetching and reading library
//!
//! This crate fetches essays from the web, extracts the article text from
//! the surrounding page markup, and formats it as display-ready markdown.
//!
//! ## Extraction rules
//!
//! Essaykit uses a pluggable rule system where per-source rules carry the
//! selector and text-join policy for one site's markup. The [`RuleRegistry`]
//! dispatches extraction to the first rule matching the source URL.
//!
//! Built-in rules:
//! - [`PaulGrahamRule`] - legacy table layout on paulgraham.com
//! - [`ReadableRule`] - generic readable-content fallback

pub mod catalog;
pub mod client;
mod error;
mod format;
mod reader;
pub mod rules;
mod types;
mod view;

pub use catalog::ESSAYS;
pub use client::{fetch_page, FetchOptions};
pub use error::EssayError;
pub use format::{format_essay, read_minutes, split_paragraphs, word_count};
pub use reader::{Reader, ReaderBuilder};
pub use rules::{ExtractionRule, PaulGrahamRule, ReadableRule, RuleRegistry};
pub use types::{EssayRef, FormattedEssay, Page};
pub use view::{DetailState, DetailView};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = "Essaykit/1.0";
