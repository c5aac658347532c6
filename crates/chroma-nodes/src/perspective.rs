//! Perspective transform node (stub).
//!
//! Stores a 3x3 row-major homography matrix but applies no warp:
//! `process` returns the input unchanged. Warping, sampling, and
//! interpolation are host concerns that were never specified for this
//! node; the parameter surface exists so graphs that reference it keep
//! loading.

use chroma_core::Image;
use tracing::debug;

use crate::node::AdjustmentNode;
use crate::{NodeError, NodeResult};

/// 3x3 row-major transform matrix.
pub type Matrix3 = [[f32; 3]; 3];

/// Perspective transform node parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerspectiveTransformNode {
    /// Homography matrix, row-major.
    pub matrix: Matrix3,
}

impl Default for PerspectiveTransformNode {
    fn default() -> Self {
        Self::identity()
    }
}

impl PerspectiveTransformNode {
    /// Create with the given homography matrix.
    #[inline]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Checked constructor: rejects non-finite matrix entries.
    pub fn try_new(matrix: Matrix3) -> NodeResult<Self> {
        if matrix.iter().flatten().any(|v| !v.is_finite()) {
            return Err(NodeError::InvalidParameter(
                "perspective matrix entries must be finite".into(),
            ));
        }
        Ok(Self::new(matrix))
    }

    /// Identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }
}

impl AdjustmentNode for PerspectiveTransformNode {
    fn type_name(&self) -> &'static str {
        "PerspectiveTransformNode"
    }

    /// Returns the input unchanged. No warp is implemented.
    fn process(&self, image: &Image) -> Image {
        debug!(
            width = image.width(),
            height = image.height(),
            "Perspective transform is a pass-through stub"
        );
        image.clone()
    }
}
