//! Configuration for phrase location.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Scale at which pages are displayed by the default viewer.
pub const DEFAULT_RENDER_SCALE: f32 = 1.5;

/// Scale at which fragment widths are reported by the extractor.
pub const DEFAULT_MEASUREMENT_SCALE: f32 = 1.0;

/// Phrase locator configuration.
///
/// These three options are the whole configuration surface. The two scales are
/// kept apart on purpose: see [`ScaleConfig`](crate::geometry::ScaleConfig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Phrase to locate, matched word by word
    pub phrase: String,

    /// Factor from document units to the pixels of the displayed page.
    #[serde(default = "default_render_scale")]
    pub render_scale: f32,

    /// Factor the fragment widths were measured at.
    #[serde(default = "default_measurement_scale")]
    pub measurement_scale: f32,
}

fn default_render_scale() -> f32 {
    DEFAULT_RENDER_SCALE
}

fn default_measurement_scale() -> f32 {
    DEFAULT_MEASUREMENT_SCALE
}

impl LocatorConfig {
    /// Create a configuration for `phrase` with the default scales.
    pub fn new(phrase: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            render_scale: DEFAULT_RENDER_SCALE,
            measurement_scale: DEFAULT_MEASUREMENT_SCALE,
        }
    }

    /// Set the render scale.
    pub fn with_render_scale(mut self, scale: f32) -> Self {
        self.render_scale = scale;
        self
    }

    /// Set the measurement scale.
    pub fn with_measurement_scale(mut self, scale: f32) -> Self {
        self.measurement_scale = scale;
        self
    }

    /// Check that both scales are finite and positive.
    ///
    /// An empty phrase is accepted; it never matches anything.
    pub fn validate(&self) -> Result<()> {
        check_scale("render_scale", self.render_scale)?;
        check_scale("measurement_scale", self.measurement_scale)
    }
}

fn check_scale(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{} must be a positive finite number, got {}",
            name, value
        )))
    }
}
