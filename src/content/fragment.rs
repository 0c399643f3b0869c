//! Positioned text runs as delivered by a text extractor.

use super::matrix::Matrix;
use serde::{Deserialize, Serialize};

/// Writing direction reported for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left to right
    #[default]
    Ltr,
    /// Right to left
    Rtl,
}

/// One atomic positioned text run on a page.
///
/// Coordinates are in the document's native space (origin bottom-left, y up).
/// Fragments are produced by the extraction collaborator and only ever read
/// by the locator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Text of the run
    pub text: String,
    /// Text rendering matrix `[a, b, c, d, e, f]`
    pub transform: Matrix,
    /// Advance width of the run, if the extractor reported one
    #[serde(default)]
    pub width: Option<f32>,
    /// Writing direction
    #[serde(default)]
    pub direction: TextDirection,
}

impl Fragment {
    /// Create a left-to-right fragment.
    pub fn new(text: impl Into<String>, transform: Matrix, width: Option<f32>) -> Self {
        Self {
            text: text.into(),
            transform,
            width,
            direction: TextDirection::Ltr,
        }
    }

    /// Set the writing direction.
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Reported width, treating a zero or non-finite width as missing.
    pub fn measured_width(&self) -> Option<f32> {
        self.width.filter(|w| w.is_finite() && *w != 0.0)
    }
}
