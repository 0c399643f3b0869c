//! Text rendering matrix attached to each extracted fragment.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A 2D transformation matrix.
///
/// PDF uses matrices of the form:
/// ```text
/// [ a  b  0 ]
/// [ c  d  0 ]
/// [ e  f  1 ]
/// ```
///
/// Where (a,b,c,d) define scaling/rotation/skewing and (e,f) define translation.
/// For a text fragment, (e,f) is the baseline origin in document space
/// (origin bottom-left, y up) and the (c,d) column carries the font height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 6]", into = "[f32; 6]")]
pub struct Matrix {
    /// Horizontal scaling component
    pub a: f32,
    /// Rotation/skew component
    pub b: f32,
    /// Rotation/skew component
    pub c: f32,
    /// Vertical scaling component
    pub d: f32,
    /// Horizontal translation
    pub e: f32,
    /// Vertical translation
    pub f: f32,
}

impl Matrix {
    /// Create an identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::content::Matrix;
    ///
    /// let m = Matrix::identity();
    /// assert_eq!(m.a, 1.0);
    /// assert_eq!(m.d, 1.0);
    /// assert_eq!(m.e, 0.0);
    /// ```
    pub fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    /// Create a matrix from its six components `[a, b, c, d, e, f]`.
    pub fn new(values: [f32; 6]) -> Self {
        let [a, b, c, d, e, f] = values;
        Self { a, b, c, d, e, f }
    }

    /// Matrix for a horizontal text run of `font_size` placed at `(x, y)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_locate::content::Matrix;
    ///
    /// let m = Matrix::text_run(12.0, 72.0, 700.0);
    /// assert_eq!(m.glyph_height(), 12.0);
    /// assert_eq!(m.origin().x, 72.0);
    /// ```
    pub fn text_run(font_size: f32, x: f32, y: f32) -> Self {
        Self::new([font_size, 0.0, 0.0, font_size, x, y])
    }

    /// The six components as an array.
    pub fn to_array(&self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Baseline origin of the run in document space.
    pub fn origin(&self) -> Point {
        Point::new(self.e, self.f)
    }

    /// Length of the (c, d) column: the rendered glyph height in document units.
    ///
    /// Zero for degenerate matrices; callers supply their own fallback.
    pub fn glyph_height(&self) -> f32 {
        self.c.hypot(self.d)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f32; 6]> for Matrix {
    fn from(values: [f32; 6]) -> Self {
        Self::new(values)
    }
}

impl From<Matrix> for [f32; 6] {
    fn from(m: Matrix) -> Self {
        m.to_array()
    }
}
