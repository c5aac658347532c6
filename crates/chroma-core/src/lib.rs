//! # chroma-core
//!
//! Core types for the chroma-rs adjustment nodes.
//!
//! This crate provides the foundational types shared by every node:
//!
//! - [`Image`] - Owned, rectangular, row-major 8-bit RGB pixel grid
//! - [`Rgb8`] - A single pixel as a `[u8; 3]` channel triple
//! - [`Error`], [`Result`] - Validation errors for malformed grids
//! - Pixel helpers: [`clamp_channel`], [`mean_luminance`]
//!
//! ## Design
//!
//! The node contract is fixed: rectangular grid in, rectangular grid of the
//! same dimensions out, every channel in `[0, 255]`. [`Image`] enforces the
//! rectangularity invariant at construction, so node `process` functions
//! are total and never need to re-validate their input.
//!
//! ```
//! use chroma_core::Image;
//!
//! let img = Image::from_rows(vec![
//!     vec![[255, 0, 0], [0, 255, 0]],
//!     vec![[0, 0, 255], [128, 128, 128]],
//! ]).unwrap();
//! assert_eq!(img.dimensions(), (2, 2));
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` - Row-parallel [`Image::map_pixels`] via rayon (default)
//! - `serde` - Serialization for [`Image`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::Image;
pub use pixel::{
    clamp_channel, mean_luminance, Rgb8, HIGHLIGHT_THRESHOLD, SHADOW_THRESHOLD,
};
