//! External text-extraction collaborators.
//!
//! The locator never parses documents itself. A [`DocumentLoader`] opens a
//! document by identity and hands back a [`TextSource`], which in turn yields
//! each page's fragments and height on request. Both are async because real
//! extractors do I/O; the scanner awaits them one page at a time.

pub mod memory;

pub use memory::{MemoryDocument, MemoryError, MemoryLibrary};

use crate::content::Fragment;
use crate::error::SourceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an open document (a path, URL, or any other stable key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Text content of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Fragments in extraction order
    pub fragments: Vec<Fragment>,
    /// Page height in document units (the height of the view box at scale 1)
    pub height: f32,
}

impl PageText {
    /// Create page content.
    pub fn new(fragments: Vec<Fragment>, height: f32) -> Self {
        Self { fragments, height }
    }

    /// Height of the page when displayed at `render_scale`.
    pub fn pixel_height(&self, render_scale: f32) -> f32 {
        self.height * render_scale
    }
}

/// An opened document that can deliver page text.
#[async_trait]
pub trait TextSource: Send + Sync {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Load page `page_number` (1-based) and extract its text content.
    async fn load_page(&self, page_number: usize) -> std::result::Result<PageText, SourceError>;
}

/// Opens documents by identity.
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Open `document` for text extraction.
    async fn open(
        &self,
        document: &DocumentId,
    ) -> std::result::Result<Box<dyn TextSource>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_display() {
        let id = DocumentId::from("reports/q2-2025.pdf");
        assert_eq!(id.to_string(), "reports/q2-2025.pdf");
        assert_eq!(id.as_str(), "reports/q2-2025.pdf");
        assert_eq!(id, DocumentId::new(String::from("reports/q2-2025.pdf")));
    }

    #[test]
    fn test_page_pixel_height() {
        let page = PageText::new(Vec::new(), 842.0);
        assert_eq!(page.pixel_height(1.0), 842.0);
        assert_eq!(page.pixel_height(1.5), 1263.0);
    }
}
