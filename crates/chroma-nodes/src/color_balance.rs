//! Color balance: per-luminance-band RGB shifts.
//!
//! Each pixel is classified by mean luminance into shadows, midtones, or
//! highlights, and the corresponding per-channel shift triple is added,
//! clamped to `[0, 255]`. Identity when all three triples are zero.

use chroma_core::{
    clamp_channel, mean_luminance, Image, Rgb8, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD,
};
use tracing::debug;

use crate::node::AdjustmentNode;
use crate::{NodeError, NodeResult};

/// Luminance band of a pixel, classified by mean channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LumaBand {
    /// Mean luminance below 85.
    Shadows,
    /// Mean luminance in `[85, 170)`.
    Midtones,
    /// Mean luminance of 170 or above.
    Highlights,
}

impl LumaBand {
    /// Classify a pixel by its mean channel value.
    #[inline]
    pub fn classify(px: Rgb8) -> Self {
        let luma = mean_luminance(px);
        if luma < SHADOW_THRESHOLD {
            Self::Shadows
        } else if luma < HIGHLIGHT_THRESHOLD {
            Self::Midtones
        } else {
            Self::Highlights
        }
    }
}

/// Color balance node parameters: one `[R, G, B]` shift triple per band.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorBalanceNode {
    /// Shift applied to shadow pixels.
    pub shadows: [f32; 3],
    /// Shift applied to midtone pixels.
    pub midtones: [f32; 3],
    /// Shift applied to highlight pixels.
    pub highlights: [f32; 3],
}

impl ColorBalanceNode {
    /// Create with the given per-band shift triples.
    #[inline]
    pub fn new(shadows: [f32; 3], midtones: [f32; 3], highlights: [f32; 3]) -> Self {
        Self {
            shadows,
            midtones,
            highlights,
        }
    }

    /// Checked constructor: rejects non-finite shift components.
    pub fn try_new(
        shadows: [f32; 3],
        midtones: [f32; 3],
        highlights: [f32; 3],
    ) -> NodeResult<Self> {
        for band in [&shadows, &midtones, &highlights] {
            if band.iter().any(|v| !v.is_finite()) {
                return Err(NodeError::InvalidParameter(format!(
                    "color balance shifts must be finite, got {band:?}"
                )));
            }
        }
        Ok(Self::new(shadows, midtones, highlights))
    }

    /// Identity adjustment (all shifts zero).
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Check if this adjustment is identity (no-op).
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.shadows == [0.0; 3] && self.midtones == [0.0; 3] && self.highlights == [0.0; 3]
    }

    /// Shift triple for the given band.
    #[inline]
    pub fn shift_for(&self, band: LumaBand) -> [f32; 3] {
        match band {
            LumaBand::Shadows => self.shadows,
            LumaBand::Midtones => self.midtones,
            LumaBand::Highlights => self.highlights,
        }
    }

    /// Apply the adjustment to a single pixel.
    #[inline]
    pub fn apply_pixel(&self, px: Rgb8) -> Rgb8 {
        let shift = self.shift_for(LumaBand::classify(px));
        [
            clamp_channel(px[0] as f32 + shift[0]),
            clamp_channel(px[1] as f32 + shift[1]),
            clamp_channel(px[2] as f32 + shift[2]),
        ]
    }
}

impl AdjustmentNode for ColorBalanceNode {
    fn type_name(&self) -> &'static str {
        "ColorBalanceNode"
    }

    fn process(&self, image: &Image) -> Image {
        debug!(
            width = image.width(),
            height = image.height(),
            shadows = ?self.shadows,
            midtones = ?self.midtones,
            highlights = ?self.highlights,
            "Applying color balance"
        );
        image.map_pixels(|px| self.apply_pixel(px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_classification() {
        assert_eq!(LumaBand::classify([0, 0, 0]), LumaBand::Shadows);
        assert_eq!(LumaBand::classify([84, 84, 84]), LumaBand::Shadows);
        assert_eq!(LumaBand::classify([85, 85, 85]), LumaBand::Midtones);
        assert_eq!(LumaBand::classify([169, 169, 169]), LumaBand::Midtones);
        assert_eq!(LumaBand::classify([170, 170, 170]), LumaBand::Highlights);
        assert_eq!(LumaBand::classify([255, 255, 255]), LumaBand::Highlights);
    }

    #[test]
    fn band_uses_mean_not_max() {
        // Mean of (255, 0, 0) is 85 -> midtones despite the bright red.
        assert_eq!(LumaBand::classify([255, 0, 0]), LumaBand::Midtones);
        // Mean of (254, 0, 0) is 84.67 -> shadows.
        assert_eq!(LumaBand::classify([254, 0, 0]), LumaBand::Shadows);
    }

    #[test]
    fn identity_is_noop() {
        let node = ColorBalanceNode::identity();
        assert!(node.is_identity());

        let img = Image::from_rows(vec![
            vec![[10, 20, 30], [90, 100, 110]],
            vec![[180, 190, 200], [255, 255, 255]],
        ])
        .unwrap();
        assert_eq!(node.process(&img), img);
    }

    #[test]
    fn shifts_are_band_selective() {
        let node = ColorBalanceNode::new(
            [20.0, 0.0, 0.0],  // warm the shadows
            [0.0, -10.0, 0.0], // pull green out of midtones
            [0.0, 0.0, 15.0],  // cool the highlights
        );

        assert_eq!(node.apply_pixel([40, 40, 40]), [60, 40, 40]);
        assert_eq!(node.apply_pixel([120, 120, 120]), [120, 110, 120]);
        assert_eq!(node.apply_pixel([200, 200, 200]), [200, 200, 215]);
    }

    #[test]
    fn shifts_clamp() {
        let node = ColorBalanceNode::new([-100.0, 0.0, 0.0], [0.0; 3], [100.0, 0.0, 0.0]);
        assert_eq!(node.apply_pixel([50, 20, 20]), [0, 20, 20]);
        assert_eq!(node.apply_pixel([200, 200, 200]), [255, 200, 200]);
    }

    #[test]
    fn fractional_shifts_round() {
        let node = ColorBalanceNode::new([0.5, 0.4, 0.0], [0.0; 3], [0.0; 3]);
        assert_eq!(node.apply_pixel([10, 10, 10]), [11, 10, 10]);
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(ColorBalanceNode::try_new([f32::NAN, 0.0, 0.0], [0.0; 3], [0.0; 3]).is_err());
        assert!(ColorBalanceNode::try_new([0.0; 3], [0.0; 3], [0.0; 3]).is_ok());
    }
}
