//! Extracted page content: positioned text fragments and their matrices.
//!
//! A text extractor (PDF content-stream interpretation, or any other source)
//! delivers each page as an ordered list of [`Fragment`]s. Nothing in this
//! crate mutates them.

pub mod fragment;
pub mod matrix;

pub use fragment::{Fragment, TextDirection};
pub use matrix::Matrix;
