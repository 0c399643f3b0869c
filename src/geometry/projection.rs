//! Projection of matched fragments from document space to page pixels.
//!
//! Boxes are computed per fragment, not per glyph or per word: every word of a
//! fragment that falls inside a match contributes the same single box, which
//! spans the fragment's full reported width.
//!
//! For a fragment with matrix `[a, b, c, d, e, f]`:
//!
//! ```text
//! height = hypot(c, d)                     (10 if that is zero)
//! width  = fragment width                  (50 if missing)
//! left   = e * render_scale
//! top    = page_px_height - f * render_scale - height * render_scale
//! w      = width / measurement_scale * render_scale
//! h      = height * render_scale
//! ```

use super::Rect;
use crate::config::{LocatorConfig, DEFAULT_MEASUREMENT_SCALE, DEFAULT_RENDER_SCALE};
use crate::content::Fragment;
use crate::search::PhraseWindow;
use crate::text::Token;

/// Glyph height used when a fragment's matrix has no vertical extent.
pub const FALLBACK_GLYPH_HEIGHT: f32 = 10.0;

/// Width used when the extractor did not report one.
pub const DEFAULT_FRAGMENT_WIDTH: f32 = 50.0;

/// The two scale factors used by the projection.
///
/// Position and height are multiplied by `render_scale` only. Width is first
/// divided by `measurement_scale` and then multiplied by `render_scale`. When
/// the extractor measured widths at a scale other than the one it reports as
/// `measurement_scale`, boxes come out slightly too wide or too narrow while
/// still being correctly placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleConfig {
    /// Document units to displayed pixels
    pub render_scale: f32,
    /// Scale at which fragment widths were measured
    pub measurement_scale: f32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            render_scale: DEFAULT_RENDER_SCALE,
            measurement_scale: DEFAULT_MEASUREMENT_SCALE,
        }
    }
}

impl From<&LocatorConfig> for ScaleConfig {
    fn from(config: &LocatorConfig) -> Self {
        Self {
            render_scale: config.render_scale,
            measurement_scale: config.measurement_scale,
        }
    }
}

/// Maps matched fragments to pixel-space rectangles.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryProjector {
    scales: ScaleConfig,
}

impl GeometryProjector {
    /// Create a projector for the given scales.
    pub fn new(scales: ScaleConfig) -> Self {
        Self { scales }
    }

    /// The scales this projector applies.
    pub fn scales(&self) -> ScaleConfig {
        self.scales
    }

    /// One rectangle per distinct fragment touched by `window`, in order.
    ///
    /// `page_height_px` is the height of the page as displayed at the render
    /// scale.
    pub fn project(
        &self,
        window: &PhraseWindow,
        tokens: &[Token<'_>],
        fragments: &[Fragment],
        page_height_px: f32,
    ) -> Vec<Rect> {
        touched_fragments(window, tokens)
            .into_iter()
            .filter_map(|idx| fragments.get(idx))
            .map(|fragment| self.fragment_rect(fragment, page_height_px))
            .collect()
    }

    /// Pixel rectangle for a single fragment.
    pub fn fragment_rect(&self, fragment: &Fragment, page_height_px: f32) -> Rect {
        let ScaleConfig {
            render_scale,
            measurement_scale,
        } = self.scales;

        let origin = fragment.transform.origin();
        let glyph_height = match fragment.transform.glyph_height() {
            h if h.is_finite() && h != 0.0 => h,
            _ => FALLBACK_GLYPH_HEIGHT,
        };
        let width = fragment.measured_width().unwrap_or(DEFAULT_FRAGMENT_WIDTH) / measurement_scale;

        let px = origin.x * render_scale;
        let baseline = page_height_px - origin.y * render_scale;
        let height = glyph_height * render_scale;

        Rect::new(px, baseline - height, width * render_scale, height)
    }
}

/// Distinct fragment indices of the tokens inside `window`, in first-seen order.
pub fn touched_fragments(window: &PhraseWindow, tokens: &[Token<'_>]) -> Vec<usize> {
    let mut touched: Vec<usize> = Vec::new();
    for token in tokens.get(window.range()).unwrap_or_default() {
        if !touched.contains(&token.fragment_index) {
            touched.push(token.fragment_index);
        }
    }
    touched
}
