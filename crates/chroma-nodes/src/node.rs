//! The shared node contract.
//!
//! Every adjustment node implements [`AdjustmentNode`]: a pure, stateless
//! `process` over a rectangular grid. The trait is object-safe so a host
//! can hold a heterogeneous graph as `Box<dyn AdjustmentNode>`.

use chroma_core::Image;

/// A host-invokable image adjustment.
///
/// # Contract
///
/// - `process` is pure: no side effects, no mutation of the input.
/// - Total over valid grids: no panics, no errors for any rectangular
///   input with channels in `[0, 255]`.
/// - Output dimensions equal input dimensions.
/// - Output channels lie in `[0, 255]` (guaranteed by the `u8` pixel type).
pub trait AdjustmentNode: Send + Sync {
    /// Host registration key for this node type,
    /// e.g. `"BrightnessContrastNode"`.
    fn type_name(&self) -> &'static str;

    /// Applies the adjustment, returning a new image of the same
    /// dimensions.
    fn process(&self, image: &Image) -> Image;
}
