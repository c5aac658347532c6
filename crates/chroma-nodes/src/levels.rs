//! Levels adjustment: black/white point window remap.
//!
//! # Formula
//!
//! ```text
//! out = clamp(0, 255, round((in - black) * 255 / (white - black)))
//! ```
//!
//! Identity at `black = 0, white = 255`.
//!
//! # Degenerate bounds
//!
//! When `white_point == black_point` the window is silently widened to
//! `black_point + 1` instead of dividing by zero. Legacy host behavior;
//! hosts that prefer validation can use [`LevelsNode::try_new`].

use chroma_core::{clamp_channel, Image};
use tracing::debug;

use crate::node::AdjustmentNode;
use crate::{NodeError, NodeResult};

/// Levels node parameters. Both points live in the 0-255 channel domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelsNode {
    /// Input value mapped to 0.
    pub black_point: f32,
    /// Input value mapped to 255.
    pub white_point: f32,
}

impl Default for LevelsNode {
    fn default() -> Self {
        Self::identity()
    }
}

impl LevelsNode {
    /// Create with the given black and white points.
    #[inline]
    pub fn new(black_point: f32, white_point: f32) -> Self {
        Self {
            black_point,
            white_point,
        }
    }

    /// Checked constructor: rejects non-finite parameters and equal bounds.
    pub fn try_new(black_point: f32, white_point: f32) -> NodeResult<Self> {
        if !black_point.is_finite() || !white_point.is_finite() {
            return Err(NodeError::InvalidParameter(format!(
                "levels bounds must be finite, got ({black_point}, {white_point})"
            )));
        }
        if white_point == black_point {
            return Err(NodeError::InvalidParameter(format!(
                "levels bounds must differ, got ({black_point}, {white_point})"
            )));
        }
        Ok(Self::new(black_point, white_point))
    }

    /// Identity adjustment (no change).
    #[inline]
    pub fn identity() -> Self {
        Self::new(0.0, 255.0)
    }

    /// Check if this adjustment is identity (no-op).
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.black_point == 0.0 && self.white_point == 255.0
    }

    /// Effective white point after the equal-bounds nudge.
    #[inline]
    fn effective_white(&self) -> f32 {
        if self.white_point == self.black_point {
            self.black_point + 1.0
        } else {
            self.white_point
        }
    }

    /// Apply the remap to a single channel value.
    #[inline]
    pub fn apply_channel(&self, v: u8) -> u8 {
        let scale = 255.0 / (self.effective_white() - self.black_point);
        clamp_channel((v as f32 - self.black_point) * scale)
    }
}

impl AdjustmentNode for LevelsNode {
    fn type_name(&self) -> &'static str {
        "LevelsNode"
    }

    fn process(&self, image: &Image) -> Image {
        debug!(
            width = image.width(),
            height = image.height(),
            black = self.black_point,
            white = self.white_point,
            "Applying levels"
        );
        image.map_pixels(|px| px.map(|v| self.apply_channel(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_noop() {
        let node = LevelsNode::identity();
        assert!(node.is_identity());

        let img = Image::from_rows(vec![
            vec![[0, 1, 2], [253, 254, 255]],
            vec![[100, 150, 200], [33, 66, 99]],
        ])
        .unwrap();
        assert_eq!(node.process(&img), img);
    }

    #[test]
    fn window_stretches_contrast() {
        let node = LevelsNode::new(50.0, 200.0);
        assert_eq!(node.apply_channel(50), 0);
        assert_eq!(node.apply_channel(200), 255);
        // Midpoint of the window maps to the midpoint of the range.
        assert_eq!(node.apply_channel(125), 128);
    }

    #[test]
    fn values_outside_window_clamp() {
        let node = LevelsNode::new(50.0, 200.0);
        assert_eq!(node.apply_channel(0), 0);
        assert_eq!(node.apply_channel(49), 0);
        assert_eq!(node.apply_channel(201), 255);
        assert_eq!(node.apply_channel(255), 255);
    }

    #[test]
    fn equal_bounds_nudge() {
        // white == black behaves exactly as white = black + 1.
        let degenerate = LevelsNode::new(100.0, 100.0);
        let nudged = LevelsNode::new(100.0, 101.0);
        for v in 0..=255u8 {
            assert_eq!(degenerate.apply_channel(v), nudged.apply_channel(v));
        }
        // Which is a hard threshold at the black point.
        assert_eq!(degenerate.apply_channel(99), 0);
        assert_eq!(degenerate.apply_channel(101), 255);
    }

    #[test]
    fn inverted_window_inverts() {
        // white < black is tolerated: the remap slope is negative.
        let node = LevelsNode::new(255.0, 0.0);
        assert_eq!(node.apply_channel(0), 255);
        assert_eq!(node.apply_channel(255), 0);
    }

    #[test]
    fn try_new_rejects_equal_bounds() {
        assert!(LevelsNode::try_new(100.0, 100.0).is_err());
        assert!(LevelsNode::try_new(f32::NAN, 255.0).is_err());
        assert!(LevelsNode::try_new(0.0, 255.0).is_ok());
    }
}
