//! Integration tests for the highlight state machine driven through
//! [`Highlighter`], including scans that outlive their document.

use async_trait::async_trait;
use pdf_locate::error::SourceError;
use pdf_locate::source::{MemoryDocument, MemoryLibrary};
use pdf_locate::{
    DocumentId, DocumentLoader, Error, Fragment, HighlightState, Highlighter, LocateOutcome,
    LocatorConfig, Matrix, PageText, TextSource,
};
use std::sync::Arc;
use tokio::sync::Notify;

const PHRASE: &str = "Gain on sale of non-current assets, etc";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn page(lines: &[&str]) -> PageText {
    let fragments = lines
        .iter()
        .enumerate()
        .map(|(i, text)| {
            Fragment::new(
                *text,
                Matrix::text_run(9.0, 56.0, 700.0 - i as f32 * 12.0),
                Some(text.len() as f32 * 4.5),
            )
        })
        .collect();
    PageText::new(fragments, 842.0)
}

fn report() -> MemoryDocument {
    MemoryDocument::new(vec![
        page(&["Highlights Q2 2025"]),
        page(&["Gain on sale of", "non-current assets,", "etc", "Other income"]),
        page(&["Review Q2 2025"]),
    ])
}

fn library() -> MemoryLibrary {
    MemoryLibrary::new()
        .with_document("report.pdf", report())
        .with_document("blank.pdf", MemoryDocument::new(vec![page(&["nothing here"])]))
}

/// Loader whose documents hold page 1 until released.
struct GatedLoader {
    gate: Arc<Notify>,
    library: MemoryLibrary,
}

struct GatedDocument {
    gate: Arc<Notify>,
    inner: Box<dyn TextSource>,
}

#[async_trait]
impl TextSource for GatedDocument {
    fn page_count(&self) -> usize {
        self.inner.page_count()
    }

    async fn load_page(&self, page_number: usize) -> Result<PageText, SourceError> {
        if page_number == 1 {
            self.gate.notified().await;
        }
        self.inner.load_page(page_number).await
    }
}

#[async_trait]
impl DocumentLoader for GatedLoader {
    async fn open(&self, document: &DocumentId) -> Result<Box<dyn TextSource>, SourceError> {
        let inner = self.library.open(document).await?;
        Ok(Box::new(GatedDocument {
            gate: self.gate.clone(),
            inner,
        }))
    }
}

/// Loader whose `open` never completes.
struct StalledLoader;

#[async_trait]
impl DocumentLoader for StalledLoader {
    async fn open(&self, _document: &DocumentId) -> Result<Box<dyn TextSource>, SourceError> {
        std::future::pending::<Result<Box<dyn TextSource>, SourceError>>().await
    }
}

fn gated() -> (Arc<GatedLoader>, Arc<Notify>) {
    let gate = Arc::new(Notify::new());
    let loader = Arc::new(GatedLoader {
        gate: gate.clone(),
        library: library(),
    });
    (loader, gate)
}

async fn wait_until_searching(hl: &Highlighter) {
    let mut rx = hl.subscribe();
    rx.wait_for(|state| state.is_searching()).await.unwrap();
}

#[tokio::test]
async fn test_found_then_rerun_is_identical() {
    init_logger();
    let hl = Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap();
    hl.set_document("report.pdf");

    let first = hl.locate(&library()).await.unwrap();
    let first_rects = hl.rects_for_page(2);
    let second = hl.locate(&library()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first_rects, hl.rects_for_page(2));
    assert_eq!(first_rects.len(), 3);
    assert_eq!(hl.first_matched_page(), Some(2));
    assert_eq!(hl.scroll_target().map(|t| t.page_number), Some(2));
}

#[tokio::test]
async fn test_not_found_state() {
    let hl = Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap();
    hl.set_document("blank.pdf");
    assert_eq!(hl.locate(&library()).await.unwrap(), LocateOutcome::NotFound);
    assert_eq!(hl.state(), HighlightState::NotFound);
    assert!(hl.first_matched_page().is_none());
    assert_eq!(hl.state().overlay_json().unwrap(), "[]");
}

#[tokio::test]
async fn test_document_change_discards_in_flight_scan() {
    init_logger();
    let (loader, gate) = gated();
    let hl = Arc::new(Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap());
    hl.set_document("report.pdf");

    let task = {
        let hl = hl.clone();
        let loader = loader.clone();
        tokio::spawn(async move { hl.locate(loader.as_ref()).await })
    };

    wait_until_searching(&hl).await;
    assert!(hl.set_document("blank.pdf"));
    assert_eq!(hl.state(), HighlightState::Idle);

    gate.notify_one();
    let outcome = task.await.unwrap().unwrap();
    assert_eq!(outcome, LocateOutcome::Discarded);
    assert_eq!(hl.state(), HighlightState::Idle);
    assert!(hl.rects_for_page(2).is_empty());

    // the new document can be searched normally afterwards
    gate.notify_one();
    assert_eq!(hl.locate(loader.as_ref()).await.unwrap(), LocateOutcome::NotFound);
}

#[tokio::test]
async fn test_locate_while_searching_is_rejected() {
    let (loader, gate) = gated();
    let hl = Arc::new(Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap());
    hl.set_document("report.pdf");

    let task = {
        let hl = hl.clone();
        let loader = loader.clone();
        tokio::spawn(async move { hl.locate(loader.as_ref()).await })
    };

    wait_until_searching(&hl).await;
    let err = hl.locate(loader.as_ref()).await.unwrap_err();
    assert!(matches!(err, Error::SearchInProgress));

    gate.notify_one();
    let outcome = task.await.unwrap().unwrap();
    assert!(matches!(outcome, LocateOutcome::Found { .. }));
    assert_eq!(hl.found(), Some(true));
}

#[tokio::test]
async fn test_subscriber_sees_searching_then_populated() {
    let (loader, gate) = gated();
    let hl = Arc::new(Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap());
    hl.set_document("report.pdf");
    let mut rx = hl.subscribe();

    let task = {
        let hl = hl.clone();
        let loader = loader.clone();
        tokio::spawn(async move { hl.locate(loader.as_ref()).await })
    };

    rx.wait_for(|state| state.is_searching()).await.unwrap();
    gate.notify_one();
    let state = rx
        .wait_for(|state| state.found().is_some())
        .await
        .unwrap()
        .clone();
    assert_eq!(state.first_matched_page(), Some(2));
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn test_document_load_failure() {
    let hl = Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap();
    hl.set_document("missing.pdf");
    let err = hl.locate(&library()).await.unwrap_err();
    match err {
        Error::DocumentLoad { document, .. } => assert_eq!(document.as_str(), "missing.pdf"),
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(hl.state(), HighlightState::Idle);
}

#[tokio::test]
async fn test_abandoned_open_does_not_block_next_locate() {
    let hl = Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap();
    hl.set_document("report.pdf");

    tokio::select! {
        biased;
        _ = hl.locate(&StalledLoader) => panic!("stalled open completed"),
        _ = std::future::ready(()) => {},
    }
    assert_eq!(hl.state(), HighlightState::Idle);

    let outcome = hl.locate(&library()).await.unwrap();
    assert!(matches!(outcome, LocateOutcome::Found { .. }));
    assert_eq!(hl.first_matched_page(), Some(2));
}

#[tokio::test]
async fn test_abandoned_scan_returns_to_idle() {
    init_logger();
    let (loader, gate) = gated();
    let hl = Highlighter::new(&LocatorConfig::new(PHRASE)).unwrap();
    hl.set_document("report.pdf");
    let rx = hl.subscribe();

    tokio::select! {
        biased;
        _ = hl.locate(loader.as_ref()) => panic!("gated scan completed"),
        _ = wait_until_searching(&hl) => {},
    }
    assert_eq!(hl.state(), HighlightState::Idle);
    assert_eq!(*rx.borrow(), HighlightState::Idle);

    gate.notify_one();
    let outcome = hl.locate(loader.as_ref()).await.unwrap();
    assert!(matches!(outcome, LocateOutcome::Found { .. }));
    assert_eq!(hl.found(), Some(true));
}
