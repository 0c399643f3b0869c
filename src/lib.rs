// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Locate
//!
//! Find a fixed phrase in the positioned text fragments extracted from a PDF
//! and turn the match into highlight rectangles aligned with a rendered page.
//!
//! ## Pipeline
//!
//! 1. **Tokenize**: each page's fragments are split into words, every word
//!    remembering which fragment it came from ([`text`])
//! 2. **Match**: the phrase is matched word by word, across fragment
//!    boundaries ([`search`])
//! 3. **Project**: each fragment touched by the match becomes one pixel-space
//!    rectangle at the render scale ([`geometry`])
//! 4. **Scan**: every page is visited in order and all matching pages are
//!    collected ([`search::PageScanner`])
//! 5. **Track**: the result drives a per-document highlight state used for
//!    drawing overlays and scrolling ([`highlight`])
//!
//! Document parsing and rendering are left to collaborators implementing
//! [`source::DocumentLoader`] and [`source::TextSource`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use pdf_locate::{Highlighter, LocateOutcome, LocatorConfig};
//!
//! let highlighter = Highlighter::new(&LocatorConfig::new("Gain on sale of non-current assets, etc"))?;
//! highlighter.set_document("q2-2025-interim.pdf");
//!
//! match highlighter.locate(&loader).await? {
//!     LocateOutcome::Found { scroll_target, .. } => viewer.scroll_to(scroll_target),
//!     LocateOutcome::NotFound => viewer.notify("Phrase not found"),
//!     LocateOutcome::Discarded => {},
//! }
//!
//! for rect in highlighter.rects_for_page(15) {
//!     viewer.draw_box(15, rect);
//! }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Extracted page content
pub mod content;
pub mod source;

// Tokenization and matching
pub mod search;
pub mod text;

// Pixel geometry
pub mod geometry;

// Highlight state
pub mod highlight;

// Re-exports
pub use config::LocatorConfig;
pub use content::{Fragment, Matrix, TextDirection};
pub use error::{Error, Result};
pub use geometry::Rect;
pub use highlight::{HighlightState, Highlighter, LocateOutcome, PageHighlight, ScrollTarget};
pub use source::{DocumentId, DocumentLoader, PageText, TextSource};
