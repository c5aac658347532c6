//! Pixel type and per-channel helpers.
//!
//! A pixel is a plain `[u8; 3]` RGB triple; every node quantizes its
//! floating-point math back to `u8` through a single helper so rounding
//! and clamping behave identically everywhere.
//!
//! # Luminance bands
//!
//! Color balance classifies pixels by *mean* channel value (not a weighted
//! luma): shadows below [`SHADOW_THRESHOLD`], midtones below
//! [`HIGHLIGHT_THRESHOLD`], highlights above.

/// A single RGB pixel with 8-bit channels.
pub type Rgb8 = [u8; 3];

/// Upper bound (exclusive) of the shadow luminance band.
pub const SHADOW_THRESHOLD: f32 = 85.0;

/// Upper bound (exclusive) of the midtone luminance band.
pub const HIGHLIGHT_THRESHOLD: f32 = 170.0;

/// Quantize a channel value: round to nearest, clamp to `[0, 255]`.
///
/// NaN maps to 0. This is the single quantization step used by every
/// adjustment node.
///
/// # Example
///
/// ```
/// use chroma_core::clamp_channel;
///
/// assert_eq!(clamp_channel(127.4), 127);
/// assert_eq!(clamp_channel(127.5), 128);
/// assert_eq!(clamp_channel(-3.0), 0);
/// assert_eq!(clamp_channel(300.0), 255);
/// ```
#[inline]
pub fn clamp_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Mean luminance of a pixel: `(r + g + b) / 3` in the 0-255 domain.
///
/// # Example
///
/// ```
/// use chroma_core::mean_luminance;
///
/// assert_eq!(mean_luminance([30, 60, 90]), 60.0);
/// ```
#[inline]
pub fn mean_luminance(rgb: Rgb8) -> f32 {
    (rgb[0] as f32 + rgb[1] as f32 + rgb[2] as f32) / 3.0
}
