//! Highlight state for the open document.
//!
//! - [`PageHighlight`]: pixel rectangles for one matching page
//! - [`HighlightState`]: `Idle`, `Searching`, `Populated` or `NotFound`
//! - [`Highlighter`]: runs locate requests and guards against stale scans

mod locator;
mod page;
mod state;

pub use locator::{Highlighter, LocateOutcome};
pub use page::{PageHighlight, ScrollTarget};
pub use state::{HighlightState, StateEvent};
