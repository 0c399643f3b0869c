//! Per-page highlight sets and the scroll target derived from them.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Highlight rectangles for one page that contains a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageHighlight {
    /// 1-based page number
    pub page_number: usize,
    /// One rectangle per matched fragment, in fragment order
    pub rects: Vec<Rect>,
}

impl PageHighlight {
    /// Create a page highlight.
    pub fn new(page_number: usize, rects: Vec<Rect>) -> Self {
        Self { page_number, rects }
    }

    /// Smallest rectangle enclosing every highlight on the page.
    pub fn bounds(&self) -> Option<Rect> {
        let mut rects = self.rects.iter();
        let first = *rects.next()?;
        Some(rects.fold(first, |acc, r| acc.union(r)))
    }
}

/// Where the viewer should scroll after a successful search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollTarget {
    /// First page (in page order) with a match
    pub page_number: usize,
    /// Bounds of the highlights on that page, in page pixels
    pub focus: Option<Rect>,
}

impl ScrollTarget {
    /// Target the first highlighted page, if any.
    pub fn first_of(highlights: &[PageHighlight]) -> Option<Self> {
        highlights.first().map(|page| Self {
            page_number: page.page_number,
            focus: page.bounds(),
        })
    }

    /// Point to center in the viewport, relative to the page's top-left corner.
    pub fn anchor(&self) -> Option<Point> {
        self.focus.map(|r| r.center())
    }
}
