//! Detail view state
//!
//! Each detail view owns one state machine: it starts in Loading, settles
//! exactly once when the pipeline resolves, and never transitions again.
//! Views for different essays share nothing; two views of the same URL fetch
//! independently.

use crate::error::EssayError;
use crate::reader::Reader;
use crate::types::{EssayRef, FormattedEssay};

/// Display state of a detail view
#[derive(Debug)]
pub enum DetailState {
    /// Pipeline not yet resolved
    Loading,
    /// Pipeline resolved with content
    Loaded(FormattedEssay),
    /// Pipeline resolved with a failure
    Failed(EssayError),
}

/// A detail view for one essay
#[derive(Debug)]
pub struct DetailView {
    essay: EssayRef,
    state: DetailState,
}

impl DetailView {
    /// Mount a view for an essay; starts in Loading
    pub fn new(essay: EssayRef) -> Self {
        Self {
            essay,
            state: DetailState::Loading,
        }
    }

    /// The essay this view presents
    pub fn essay(&self) -> &EssayRef {
        &self.essay
    }

    /// Current display state
    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Run the pipeline and settle the view
    ///
    /// A view settles at most once; resolving an already-settled view is a
    /// no-op that returns the settled state.
    pub async fn resolve(&mut self, reader: &Reader) -> &DetailState {
        if matches!(self.state, DetailState::Loading) {
            self.state = match reader.read(&self.essay).await {
                Ok(content) => DetailState::Loaded(content),
                Err(err) => DetailState::Failed(err),
            };
        }
        &self.state
    }
}
