//! The highlight state machine.
//!
//! ```text
//!            LocateRequested            ScanCompleted(non-empty)
//!   Idle ─────────────────► Searching ─────────────────────────► Populated
//!    ▲                        │   │                                  │
//!    │         ScanFailed     │   │ ScanCompleted(empty)             │
//!    ├────────────────────────┘   └─────────────────► NotFound       │
//!    │                                                   │           │
//!    │                  LocateRequested (re-run) ◄───────┴───────────┘
//!    │
//!    └──── DocumentChanged (from any state)
//! ```

use super::page::{PageHighlight, ScrollTarget};
use crate::error::{Error, Result};
use crate::geometry::Rect;

/// Highlight state of the open document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HighlightState {
    /// Nothing searched for the current document
    #[default]
    Idle,
    /// A scan is running
    Searching,
    /// The last scan matched on at least one page
    Populated(Vec<PageHighlight>),
    /// The last scan matched nowhere
    NotFound,
}

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum StateEvent {
    /// The active document identity changed
    DocumentChanged,
    /// A locate request was issued
    LocateRequested,
    /// The scanner finished with these page highlights
    ScanCompleted(Vec<PageHighlight>),
    /// The scanner aborted on a page load failure
    ScanFailed,
}

impl StateEvent {
    /// Event name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            StateEvent::DocumentChanged => "DocumentChanged",
            StateEvent::LocateRequested => "LocateRequested",
            StateEvent::ScanCompleted(_) => "ScanCompleted",
            StateEvent::ScanFailed => "ScanFailed",
        }
    }
}

impl HighlightState {
    /// Apply `event`, returning the next state.
    ///
    /// A locate request while already searching is rejected with
    /// [`Error::SearchInProgress`]; any other event that has no edge from the
    /// current state yields [`Error::InvalidTransition`].
    pub fn apply(self, event: StateEvent) -> Result<HighlightState> {
        use HighlightState::*;

        match (self, event) {
            (_, StateEvent::DocumentChanged) => Ok(Idle),
            (Idle | Populated(_) | NotFound, StateEvent::LocateRequested) => Ok(Searching),
            (Searching, StateEvent::LocateRequested) => Err(Error::SearchInProgress),
            (Searching, StateEvent::ScanCompleted(pages)) if pages.is_empty() => Ok(NotFound),
            (Searching, StateEvent::ScanCompleted(pages)) => Ok(Populated(pages)),
            (Searching, StateEvent::ScanFailed) => Ok(Idle),
            (state, event) => Err(Error::InvalidTransition {
                from: state.name(),
                event: event.name(),
            }),
        }
    }

    /// State name, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            HighlightState::Idle => "Idle",
            HighlightState::Searching => "Searching",
            HighlightState::Populated(_) => "Populated",
            HighlightState::NotFound => "NotFound",
        }
    }

    /// True while a scan is running.
    pub fn is_searching(&self) -> bool {
        matches!(self, HighlightState::Searching)
    }

    /// Whether the last completed search found anything.
    ///
    /// `None` when no search has completed for the current document.
    pub fn found(&self) -> Option<bool> {
        match self {
            HighlightState::Populated(_) => Some(true),
            HighlightState::NotFound => Some(false),
            HighlightState::Idle | HighlightState::Searching => None,
        }
    }

    /// All page highlights; empty unless populated.
    pub fn highlights(&self) -> &[PageHighlight] {
        match self {
            HighlightState::Populated(pages) => pages,
            _ => &[],
        }
    }

    /// Rectangles to draw on page `page_number` (1-based).
    pub fn rects_for_page(&self, page_number: usize) -> &[Rect] {
        self.highlights()
            .iter()
            .find(|page| page.page_number == page_number)
            .map(|page| page.rects.as_slice())
            .unwrap_or_default()
    }

    /// First page with a match, for scroll-into-view.
    pub fn first_matched_page(&self) -> Option<usize> {
        self.highlights().first().map(|page| page.page_number)
    }

    /// Scroll target for the first matched page.
    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        ScrollTarget::first_of(self.highlights())
    }

    /// The populated highlight set as JSON for an overlay layer.
    ///
    /// Renders `[]` in every state other than `Populated`.
    pub fn overlay_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self.highlights())?)
    }
}
