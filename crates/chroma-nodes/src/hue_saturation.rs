//! Hue/saturation adjustment via HSV.
//!
//! Each pixel is converted RGB -> HSV, the hue shift is added modulo 1.0
//! (wrapping), saturation is multiplied and clamped to `[0, 1]`, and the
//! pixel is converted back and re-quantized.
//!
//! Hue is a fraction of a full turn in `[0, 1)`, not degrees. Identity at
//! `hue = 0, saturation = 1` up to integer rounding.

use chroma_core::{clamp_channel, Image, Rgb8};
use tracing::debug;

use crate::node::AdjustmentNode;
use crate::{NodeError, NodeResult};

/// Hue/saturation node parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HueSaturationNode {
    /// Hue shift as a fraction of a full turn (wraps modulo 1.0).
    pub hue: f32,
    /// Saturation multiplier (result clamped to `[0, 1]`).
    pub saturation: f32,
}

impl Default for HueSaturationNode {
    fn default() -> Self {
        Self::identity()
    }
}

impl HueSaturationNode {
    /// Create with the given hue shift and saturation scale.
    #[inline]
    pub fn new(hue: f32, saturation: f32) -> Self {
        Self { hue, saturation }
    }

    /// Checked constructor: rejects non-finite parameters.
    pub fn try_new(hue: f32, saturation: f32) -> NodeResult<Self> {
        if !hue.is_finite() || !saturation.is_finite() {
            return Err(NodeError::InvalidParameter(format!(
                "hue/saturation must be finite, got ({hue}, {saturation})"
            )));
        }
        Ok(Self::new(hue, saturation))
    }

    /// Identity adjustment (no change up to rounding).
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Check if this adjustment is identity (no-op).
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.hue == 0.0 && self.saturation == 1.0
    }

    /// Apply the adjustment to a single pixel.
    #[inline]
    pub fn apply_pixel(&self, px: Rgb8) -> Rgb8 {
        let rgb = [
            px[0] as f32 / 255.0,
            px[1] as f32 / 255.0,
            px[2] as f32 / 255.0,
        ];
        let [h, s, v] = rgb_to_hsv(rgb);
        let h = (h + self.hue).rem_euclid(1.0);
        let s = (s * self.saturation).clamp(0.0, 1.0);
        let rgb = hsv_to_rgb([h, s, v]);
        [
            clamp_channel(rgb[0] * 255.0),
            clamp_channel(rgb[1] * 255.0),
            clamp_channel(rgb[2] * 255.0),
        ]
    }
}

impl AdjustmentNode for HueSaturationNode {
    fn type_name(&self) -> &'static str {
        "HueSaturationNode"
    }

    fn process(&self, image: &Image) -> Image {
        debug!(
            width = image.width(),
            height = image.height(),
            hue = self.hue,
            saturation = self.saturation,
            "Applying hue/saturation"
        );
        image.map_pixels(|px| self.apply_pixel(px))
    }
}

/// Convert RGB to HSV. All components in `[0, 1]`; hue in `[0, 1)`.
///
/// Greys (`max == min`) report hue 0 and saturation 0.
#[inline]
pub fn rgb_to_hsv(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    [h, s, v]
}

/// Convert HSV to RGB. All components in `[0, 1]`; hue wraps.
#[inline]
pub fn hsv_to_rgb(hsv: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsv;
    let c = v * s;
    let h_prime = h.rem_euclid(1.0) * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    [r1 + m, g1 + m, b1 + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f32 = 1e-5;

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3]) {
        assert_abs_diff_eq!(a[0], b[0], epsilon = EPSILON);
        assert_abs_diff_eq!(a[1], b[1], epsilon = EPSILON);
        assert_abs_diff_eq!(a[2], b[2], epsilon = EPSILON);
    }

    #[test]
    fn hsv_primaries() {
        assert_rgb_eq(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]);
        assert_rgb_eq(rgb_to_hsv([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]);
        assert_rgb_eq(rgb_to_hsv([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]);
    }

    #[test]
    fn hsv_greys_have_zero_saturation() {
        let [h, s, v] = rgb_to_hsv([0.5, 0.5, 0.5]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(v, 0.5, epsilon = EPSILON);

        let [h, s, _] = rgb_to_hsv([0.0, 0.0, 0.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
    }

    #[test]
    fn hsv_roundtrip() {
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 1.0],
            [0.25, 0.5, 0.75],
            [0.9, 0.1, 0.4],
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
        ] {
            assert_rgb_eq(hsv_to_rgb(rgb_to_hsv(rgb)), rgb);
        }
    }

    #[test]
    fn identity_within_rounding() {
        let node = HueSaturationNode::identity();
        assert!(node.is_identity());

        let img = Image::from_rows(vec![
            vec![[255, 0, 0], [13, 144, 217]],
            vec![[128, 128, 128], [250, 251, 252]],
        ])
        .unwrap();
        let out = node.process(&img);
        for ((_, _, a), (_, _, b)) in out.pixels().zip(img.pixels()) {
            for c in 0..3 {
                assert!((a[c] as i16 - b[c] as i16).abs() <= 1);
            }
        }
    }

    #[test]
    fn half_turn_maps_red_to_cyan() {
        let node = HueSaturationNode::new(0.5, 1.0);
        assert_eq!(node.apply_pixel([255, 0, 0]), [0, 255, 255]);
    }

    #[test]
    fn hue_wraps_modulo_one() {
        let shifted = HueSaturationNode::new(1.25, 1.0);
        let quarter = HueSaturationNode::new(0.25, 1.0);
        assert_eq!(
            shifted.apply_pixel([200, 40, 90]),
            quarter.apply_pixel([200, 40, 90])
        );

        let negative = HueSaturationNode::new(-0.75, 1.0);
        assert_eq!(
            negative.apply_pixel([200, 40, 90]),
            quarter.apply_pixel([200, 40, 90])
        );
    }

    #[test]
    fn zero_saturation_desaturates_to_value() {
        let node = HueSaturationNode::new(0.0, 0.0);
        // Value (max channel) is preserved when saturation drops to zero.
        assert_eq!(node.apply_pixel([255, 0, 0]), [255, 255, 255]);
        assert_eq!(node.apply_pixel([0, 128, 64]), [128, 128, 128]);
    }

    #[test]
    fn oversaturation_clamps() {
        let node = HueSaturationNode::new(0.0, 100.0);
        let out = node.apply_pixel([200, 150, 150]);
        // Fully saturated red at the original value.
        assert_eq!(out, [200, 0, 0]);
    }
}
