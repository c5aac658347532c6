//! # chroma-nodes
//!
//! Image-adjustment plugin nodes for a host-controlled pipeline editor.
//!
//! Each node is an immutable parameter struct with a pure
//! `process(&Image) -> Image`: total over valid grids, output dimensions
//! equal to input dimensions, input never mutated. The host owns image
//! loading/saving, graph wiring, and invocation order; nodes only do
//! per-pixel arithmetic.
//!
//! # Nodes
//!
//! - [`BrightnessContrastNode`] - additive brightness, multiplicative contrast
//! - [`LevelsNode`] - black/white point window remap
//! - [`HueSaturationNode`] - hue rotation and saturation scale via HSV
//! - [`ColorBalanceNode`] - per-luminance-band RGB shifts
//! - [`PerspectiveTransformNode`] - stored matrix, pass-through (stub)
//!
//! # Example
//!
//! ```
//! use chroma_core::Image;
//! use chroma_nodes::{AdjustmentNode, BrightnessContrastNode};
//!
//! let img = Image::filled(8, 8, [100, 100, 100]);
//! let node = BrightnessContrastNode::new(20.0, 1.0);
//! let out = node.process(&img);
//! assert_eq!(out.pixel(0, 0), [120, 120, 120]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel pixel mapping via rayon (default)
//! - `serde` - Serialization for node parameters and [`NodeKind`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod node;
pub mod registry;

pub mod brightness_contrast;
pub mod color_balance;
pub mod hue_saturation;
pub mod levels;
pub mod perspective;

pub use brightness_contrast::BrightnessContrastNode;
pub use color_balance::{ColorBalanceNode, LumaBand};
pub use error::{NodeError, NodeResult};
pub use hue_saturation::HueSaturationNode;
pub use levels::LevelsNode;
pub use node::AdjustmentNode;
pub use perspective::PerspectiveTransformNode;
pub use registry::NodeKind;
