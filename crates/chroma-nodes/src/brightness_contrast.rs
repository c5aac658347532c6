//! Brightness/contrast adjustment.
//!
//! # Formula
//!
//! ```text
//! out = clamp(0, 255, round((in + brightness) * contrast))
//! ```
//!
//! Brightness is added *before* the contrast multiply, so contrast scales
//! the already-shifted value. Identity at `brightness = 0, contrast = 1`.

use chroma_core::{clamp_channel, Image};
use tracing::debug;

use crate::node::AdjustmentNode;
use crate::{NodeError, NodeResult};

/// Brightness/contrast node parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrightnessContrastNode {
    /// Additive brightness offset in channel units (may be negative).
    pub brightness: f32,
    /// Contrast multiplier (1.0 = no change).
    pub contrast: f32,
}

impl Default for BrightnessContrastNode {
    fn default() -> Self {
        Self::identity()
    }
}

impl BrightnessContrastNode {
    /// Create with the given brightness offset and contrast multiplier.
    #[inline]
    pub fn new(brightness: f32, contrast: f32) -> Self {
        Self {
            brightness,
            contrast,
        }
    }

    /// Checked constructor: rejects non-finite parameters.
    pub fn try_new(brightness: f32, contrast: f32) -> NodeResult<Self> {
        if !brightness.is_finite() || !contrast.is_finite() {
            return Err(NodeError::InvalidParameter(format!(
                "brightness/contrast must be finite, got ({brightness}, {contrast})"
            )));
        }
        Ok(Self::new(brightness, contrast))
    }

    /// Identity adjustment (no change).
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Check if this adjustment is identity (no-op).
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.brightness == 0.0 && self.contrast == 1.0
    }

    /// Apply the adjustment to a single channel value.
    #[inline]
    pub fn apply_channel(&self, v: u8) -> u8 {
        clamp_channel((v as f32 + self.brightness) * self.contrast)
    }
}

impl AdjustmentNode for BrightnessContrastNode {
    fn type_name(&self) -> &'static str {
        "BrightnessContrastNode"
    }

    fn process(&self, image: &Image) -> Image {
        debug!(
            width = image.width(),
            height = image.height(),
            brightness = self.brightness,
            contrast = self.contrast,
            "Applying brightness/contrast"
        );
        image.map_pixels(|px| px.map(|v| self.apply_channel(v)))
    }
}
