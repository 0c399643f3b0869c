//! Whole-document scan: tokenize, match, and project every page in order.

use super::phrase::{find_phrase, Phrase};
use crate::config::LocatorConfig;
use crate::error::{Error, Result};
use crate::geometry::{GeometryProjector, ScaleConfig};
use crate::highlight::PageHighlight;
use crate::source::{PageText, TextSource};
use crate::text::tokenize_page;

/// Scans a document page by page for one phrase.
///
/// Every page is visited, in page order, even after a match has been found,
/// so the result holds one [`PageHighlight`] per matching page. Pages are
/// loaded strictly one at a time.
#[derive(Debug, Clone)]
pub struct PageScanner {
    phrase: Phrase,
    projector: GeometryProjector,
}

impl PageScanner {
    /// Create a scanner from a validated configuration.
    pub fn new(config: &LocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phrase: Phrase::new(&config.phrase),
            projector: GeometryProjector::new(ScaleConfig::from(config)),
        })
    }

    /// The phrase being searched for.
    pub fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// Match and project a single page.
    pub fn scan_page(&self, page_number: usize, page: &PageText) -> Option<PageHighlight> {
        let tokens = tokenize_page(&page.fragments, page_number);
        let window = find_phrase(&tokens, &self.phrase);
        log::debug!(
            "Page {}: {} fragments, {} tokens, match {:?}",
            page_number,
            page.fragments.len(),
            tokens.len(),
            window.map(|w| w.range())
        );

        let window = window?;
        let page_height_px = page.pixel_height(self.projector.scales().render_scale);
        let rects = self
            .projector
            .project(&window, &tokens, &page.fragments, page_height_px);
        Some(PageHighlight::new(page_number, rects))
    }

    /// Scan every page of `source`.
    ///
    /// A page that fails to load aborts the scan with [`Error::PageLoad`];
    /// a partial result is never returned.
    pub async fn scan(&self, source: &dyn TextSource) -> Result<Vec<PageHighlight>> {
        let page_count = source.page_count();
        log::info!(
            "Scanning {} pages for a {}-word phrase",
            page_count,
            self.phrase.len()
        );

        let mut found = Vec::new();
        for page_number in 1..=page_count {
            let page = source.load_page(page_number).await.map_err(|e| {
                log::warn!("Aborting scan: page {} failed to load: {}", page_number, e);
                Error::page_load(page_number, e)
            })?;

            if let Some(highlight) = self.scan_page(page_number, &page) {
                found.push(highlight);
            }
        }

        log::info!("Scan finished: phrase found on {} of {} pages", found.len(), page_count);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Fragment, Matrix};
    use crate::source::MemoryDocument;

    const PHRASE: &str = "Gain on sale of non-current assets, etc";

    fn statement_page() -> PageText {
        PageText::new(
            vec![
                Fragment::new("Gain on sale of", Matrix::text_run(9.0, 50.0, 400.0), Some(70.0)),
                Fragment::new("non-current assets,", Matrix::text_run(9.0, 125.0, 400.0), Some(85.0)),
                Fragment::new("etc and other", Matrix::text_run(9.0, 215.0, 400.0), Some(60.0)),
            ],
            792.0,
        )
    }

    fn filler_page() -> PageText {
        PageText::new(
            vec![Fragment::new(
                "Revenue increased by 4%",
                Matrix::text_run(9.0, 50.0, 700.0),
                Some(120.0),
            )],
            792.0,
        )
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = LocatorConfig::new(PHRASE).with_render_scale(0.0);
        assert!(matches!(PageScanner::new(&config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_scan_page_match() {
        let scanner = PageScanner::new(&LocatorConfig::new(PHRASE)).unwrap();
        let highlight = scanner.scan_page(15, &statement_page()).unwrap();
        assert_eq!(highlight.page_number, 15);
        assert_eq!(highlight.rects.len(), 3);
        // 792 * 1.5 - 400 * 1.5 - 9 * 1.5
        assert_eq!(highlight.rects[0].y, 574.5);
    }

    #[test]
    fn test_scan_page_no_match() {
        let scanner = PageScanner::new(&LocatorConfig::new("not present here")).unwrap();
        assert!(scanner.scan_page(1, &statement_page()).is_none());
    }

    #[tokio::test]
    async fn test_scan_collects_every_matching_page() {
        let doc = MemoryDocument::new(vec![
            filler_page(),
            statement_page(),
            filler_page(),
            statement_page(),
        ]);
        let scanner = PageScanner::new(&LocatorConfig::new(PHRASE)).unwrap();
        let found = scanner.scan(&doc).await.unwrap();
        let pages: Vec<usize> = found.iter().map(|h| h.page_number).collect();
        assert_eq!(pages, vec![2, 4]);
    }

    #[tokio::test]
    async fn test_scan_empty_document() {
        let scanner = PageScanner::new(&LocatorConfig::new(PHRASE)).unwrap();
        let found = scanner.scan(&MemoryDocument::default()).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_scan_aborts_on_page_failure() {
        let doc = MemoryDocument::new(vec![statement_page(), filler_page(), statement_page()])
            .with_unreadable_page(2);
        let scanner = PageScanner::new(&LocatorConfig::new(PHRASE)).unwrap();
        let err = scanner.scan(&doc).await.unwrap_err();
        assert!(matches!(err, Error::PageLoad { page: 2, .. }));
    }
}
