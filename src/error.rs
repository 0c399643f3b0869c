//! Error types for the phrase locator.
//!
//! This module defines all error types that can occur while loading a document,
//! scanning its pages, and driving the highlight state machine. A phrase that
//! cannot be found is not an error; it is reported as
//! [`HighlightState::NotFound`](crate::highlight::HighlightState::NotFound).

use crate::source::DocumentId;

/// Boxed error produced by an external text-extraction collaborator.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for locator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during phrase location.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The collaborator failed to open or parse the document
    #[error("Failed to load document '{document}': {source}")]
    DocumentLoad {
        /// Identity of the document that failed to load
        document: DocumentId,
        /// Underlying collaborator error
        #[source]
        source: SourceError,
    },

    /// A page failed to load (or yield its text) in the middle of a scan
    #[error("Failed to load page {page}: {source}")]
    PageLoad {
        /// 1-based page number
        page: usize,
        /// Underlying collaborator error
        #[source]
        source: SourceError,
    },

    /// Invalid locator configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Locate requested before any document was set
    #[error("No document is open")]
    NoDocument,

    /// Locate requested while a scan of the same document is still running
    #[error("A search is already in progress for this document")]
    SearchInProgress,

    /// State machine event that is not valid from the current state
    #[error("Invalid highlight transition: {event} while {from}")]
    InvalidTransition {
        /// Name of the state the machine was in
        from: &'static str,
        /// Name of the rejected event
        event: &'static str,
    },

    /// Overlay serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a collaborator error as a document load failure.
    pub fn document_load(document: &DocumentId, source: impl Into<SourceError>) -> Self {
        Error::DocumentLoad {
            document: document.clone(),
            source: source.into(),
        }
    }

    /// Wrap a collaborator error as a page load failure.
    pub fn page_load(page: usize, source: impl Into<SourceError>) -> Self {
        Error::PageLoad {
            page,
            source: source.into(),
        }
    }
}
