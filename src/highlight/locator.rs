//! Document-scoped locate operations.
//!
//! A [`Highlighter`] owns the single [`HighlightState`] of the open document.
//! Every document change bumps a generation counter and resets the state to
//! `Idle`; a scan commits its result only if the generation it started under
//! is still current, so a scan that outlives its document is dropped.

use super::page::{PageHighlight, ScrollTarget};
use super::state::{HighlightState, StateEvent};
use crate::config::LocatorConfig;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::search::PageScanner;
use crate::source::{DocumentId, DocumentLoader};
use parking_lot::Mutex;
use tokio::sync::watch;

/// Result of a locate request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocateOutcome {
    /// The phrase was found on at least one page
    Found {
        /// Highlights for every matching page, in page order
        pages: Vec<PageHighlight>,
        /// Where to scroll
        scroll_target: ScrollTarget,
    },
    /// The phrase was found nowhere in the document
    NotFound,
    /// The document changed while the request was running; nothing was committed
    Discarded,
}

#[derive(Debug, Default)]
struct Inner {
    document: Option<DocumentId>,
    generation: u64,
    /// Set between accepting a request and entering `Searching`
    opening: bool,
    state: HighlightState,
}

impl Inner {
    fn apply(&mut self, event: StateEvent) -> Result<()> {
        self.state = self.state.clone().apply(event)?;
        Ok(())
    }
}

/// Clears the in-progress marks of a locate request when it ends.
///
/// Dropping the `locate` future (a `select!` branch losing, a timeout, task
/// abort) runs this too, so an abandoned request cannot leave the document
/// stuck in `opening` or `Searching`. Armed requests are rolled back to
/// `Idle`; a disarmed one has already committed its result.
struct PendingLocate<'a> {
    highlighter: &'a Highlighter,
    generation: u64,
    armed: bool,
}

impl PendingLocate<'_> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for PendingLocate<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut inner = self.highlighter.inner.lock();
        if inner.generation != self.generation {
            return;
        }
        inner.opening = false;
        if inner.state.is_searching() {
            log::debug!("Locate request abandoned mid-scan; returning to Idle");
            if inner.apply(StateEvent::ScanFailed).is_ok() {
                self.highlighter.updates.send_replace(inner.state.clone());
            }
        }
    }
}

/// Locates a phrase in the open document and tracks the resulting highlights.
pub struct Highlighter {
    scanner: PageScanner,
    inner: Mutex<Inner>,
    updates: watch::Sender<HighlightState>,
}

impl Highlighter {
    /// Create a highlighter with no document open.
    pub fn new(config: &LocatorConfig) -> Result<Self> {
        let (updates, _) = watch::channel(HighlightState::Idle);
        Ok(Self {
            scanner: PageScanner::new(config)?,
            inner: Mutex::new(Inner::default()),
            updates,
        })
    }

    /// Make `document` the active document.
    ///
    /// If the identity differs from the current one, the state is reset to
    /// `Idle` and any in-flight scan becomes stale. Returns whether the
    /// identity changed.
    pub fn set_document(&self, document: impl Into<DocumentId>) -> bool {
        let document = document.into();
        let mut inner = self.inner.lock();
        if inner.document.as_ref() == Some(&document) {
            return false;
        }
        log::debug!("Active document changed to {}", document);
        inner.document = Some(document);
        self.reset(&mut inner);
        true
    }

    /// Close the active document, resetting the state to `Idle`.
    pub fn clear_document(&self) {
        let mut inner = self.inner.lock();
        if inner.document.take().is_some() {
            self.reset(&mut inner);
        }
    }

    fn reset(&self, inner: &mut Inner) {
        inner.generation += 1;
        inner.opening = false;
        inner.state = match inner.state.clone().apply(StateEvent::DocumentChanged) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Document change rejected by state machine: {}", e);
                HighlightState::Idle
            },
        };
        self.updates.send_replace(inner.state.clone());
    }

    /// Open the active document through `loader` and scan it for the phrase.
    ///
    /// A document that fails to open is reported as [`Error::DocumentLoad`]
    /// and leaves the state untouched. A request made while the same document
    /// is already being opened or scanned is rejected with
    /// [`Error::SearchInProgress`].
    pub async fn locate(&self, loader: &dyn DocumentLoader) -> Result<LocateOutcome> {
        let (document, generation) = {
            let mut inner = self.inner.lock();
            let document = inner.document.clone().ok_or(Error::NoDocument)?;
            if inner.opening || inner.state.is_searching() {
                return Err(Error::SearchInProgress);
            }
            inner.opening = true;
            (document, inner.generation)
        };
        let mut pending = PendingLocate {
            highlighter: self,
            generation,
            armed: true,
        };

        let opened = loader.open(&document).await;

        let source = {
            let mut inner = self.inner.lock();
            if inner.generation != generation {
                log::warn!("Document changed while opening {}; request dropped", document);
                return Ok(LocateOutcome::Discarded);
            }
            inner.opening = false;
            let source = opened.map_err(|e| Error::document_load(&document, e))?;
            inner.apply(StateEvent::LocateRequested)?;
            self.updates.send_replace(inner.state.clone());
            source
        };

        let scanned = self.scanner.scan(source.as_ref()).await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            log::warn!("Document changed while scanning {}; result discarded", document);
            return Ok(LocateOutcome::Discarded);
        }
        let outcome = match scanned {
            Ok(pages) => {
                let outcome = match ScrollTarget::first_of(&pages) {
                    Some(scroll_target) => LocateOutcome::Found {
                        pages: pages.clone(),
                        scroll_target,
                    },
                    None => LocateOutcome::NotFound,
                };
                inner.apply(StateEvent::ScanCompleted(pages))?;
                Ok(outcome)
            },
            Err(e) => {
                inner.apply(StateEvent::ScanFailed)?;
                Err(e)
            },
        };
        self.updates.send_replace(inner.state.clone());
        drop(inner);
        pending.disarm();
        outcome
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> HighlightState {
        self.inner.lock().state.clone()
    }

    /// Receive every state change, starting from the current state.
    pub fn subscribe(&self) -> watch::Receiver<HighlightState> {
        self.updates.subscribe()
    }

    /// The active document, if any.
    pub fn document(&self) -> Option<DocumentId> {
        self.inner.lock().document.clone()
    }

    /// Rectangles to draw on page `page_number` (1-based).
    pub fn rects_for_page(&self, page_number: usize) -> Vec<Rect> {
        self.inner.lock().state.rects_for_page(page_number).to_vec()
    }

    /// Whether the last completed search found anything.
    pub fn found(&self) -> Option<bool> {
        self.inner.lock().state.found()
    }

    /// First page with a match.
    pub fn first_matched_page(&self) -> Option<usize> {
        self.inner.lock().state.first_matched_page()
    }

    /// Where to scroll for the current highlights.
    pub fn scroll_target(&self) -> Option<ScrollTarget> {
        self.inner.lock().state.scroll_target()
    }
}
