//! Phrase search over extracted page text.
//!
//! [`find_phrase`] matches one page's token stream; [`PageScanner`] drives
//! tokenization, matching and projection across a whole document.
//!
//! ## Example
//!
//! ```ignore
//! use pdf_locate::search::PageScanner;
//! use pdf_locate::LocatorConfig;
//!
//! let scanner = PageScanner::new(&LocatorConfig::new("Gain on sale of non-current assets, etc"))?;
//! for page in scanner.scan(&document).await? {
//!     println!("page {}: {} boxes", page.page_number, page.rects.len());
//! }
//! ```

mod phrase;
mod scanner;

pub use phrase::{find_phrase, Phrase, PhraseWindow};
pub use scanner::PageScanner;
