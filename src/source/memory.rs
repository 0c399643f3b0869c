//! In-memory collaborators for hosts that already hold extracted text.

use super::{DocumentId, DocumentLoader, PageText, TextSource};
use crate::error::{Result, SourceError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Failures reported by the in-memory collaborators.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// No document registered under this identity
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// Page number outside `1..=page_count`
    #[error("Page {page} out of range (document has {count} pages)")]
    PageOutOfRange {
        /// Requested page
        page: usize,
        /// Number of pages in the document
        count: usize,
    },

    /// Page marked as unreadable
    #[error("Page {0} is unreadable")]
    UnreadablePage(usize),
}

/// A document whose pages are already extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    pages: Vec<PageText>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    unreadable: BTreeSet<usize>,
}

impl MemoryDocument {
    /// Create a document from its pages, first page first.
    pub fn new(pages: Vec<PageText>) -> Self {
        Self {
            pages,
            unreadable: BTreeSet::new(),
        }
    }

    /// Parse a document from JSON of the form `{"pages": [{"fragments": [...], "height": 792}]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Append a page.
    pub fn push_page(&mut self, page: PageText) {
        self.pages.push(page);
    }

    /// Make `page_number` fail to load.
    pub fn with_unreadable_page(mut self, page_number: usize) -> Self {
        self.unreadable.insert(page_number);
        self
    }

    /// The pages, first page first.
    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }
}

#[async_trait]
impl TextSource for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn load_page(&self, page_number: usize) -> std::result::Result<PageText, SourceError> {
        if self.unreadable.contains(&page_number) {
            return Err(MemoryError::UnreadablePage(page_number).into());
        }
        page_number
            .checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .cloned()
            .ok_or_else(|| {
                MemoryError::PageOutOfRange {
                    page: page_number,
                    count: self.pages.len(),
                }
                .into()
            })
    }
}

/// A set of in-memory documents keyed by identity.
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    documents: HashMap<DocumentId, MemoryDocument>,
}

impl MemoryLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a document.
    pub fn insert(&mut self, id: impl Into<DocumentId>, document: MemoryDocument) {
        self.documents.insert(id.into(), document);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_document(mut self, id: impl Into<DocumentId>, document: MemoryDocument) -> Self {
        self.insert(id, document);
        self
    }
}

#[async_trait]
impl DocumentLoader for MemoryLibrary {
    async fn open(
        &self,
        document: &DocumentId,
    ) -> std::result::Result<Box<dyn TextSource>, SourceError> {
        match self.documents.get(document) {
            Some(doc) => Ok(Box::new(doc.clone())),
            None => Err(MemoryError::DocumentNotFound(document.clone()).into()),
        }
    }
}
