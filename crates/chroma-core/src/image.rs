//! Rectangular 8-bit RGB image grid.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [px px px ...]  <- Row 0
//!         [px px px ...]  <- Row 1
//!         ...
//! ```
//!
//! # Invariant
//!
//! `data.len() == width * height` always holds. The fallible constructors
//! ([`Image::from_rows`], [`Image::from_pixels`]) reject input that would
//! violate it, so every downstream node can assume a well-formed grid.
//!
//! # Usage
//!
//! ```
//! use chroma_core::Image;
//!
//! let mut img = Image::new(4, 2);
//! img.set_pixel(0, 0, [255, 128, 0]);
//! assert_eq!(img.pixel(0, 0), [255, 128, 0]);
//!
//! // Pure per-pixel mapping preserves dimensions.
//! let inverted = img.map_pixels(|[r, g, b]| [255 - r, 255 - g, 255 - b]);
//! assert_eq!(inverted.dimensions(), img.dimensions());
//! ```

use crate::error::{Error, Result};
use crate::pixel::Rgb8;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Owned, rectangular, row-major grid of [`Rgb8`] pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// Pixel data, row-major
    data: Vec<Rgb8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl Image {
    /// Creates a new image filled with black pixels.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_core::Image;
    ///
    /// let img = Image::new(16, 9);
    /// assert_eq!(img.dimensions(), (16, 9));
    /// assert_eq!(img.pixel(0, 0), [0, 0, 0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Creates a new image filled with the given pixel.
    pub fn filled(width: u32, height: u32, pixel: Rgb8) -> Self {
        Self {
            data: vec![pixel; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates an image from a flat row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSizeMismatch`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgb8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::data_size_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image from nested rows, validating rectangularity.
    ///
    /// This is the boundary constructor for untrusted host data: the host
    /// contract hands nodes a sequence of rows of pixel triples, and a
    /// ragged grid is rejected rather than silently tolerated.
    ///
    /// An empty row list produces an empty (0x0) image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRow`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<Rgb8>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(Error::ragged_row(y, row.len(), width));
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            width: width as u32,
            height: height as u32,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Image dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image contains no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw pixel data, row-major.
    #[inline]
    pub fn data(&self) -> &[Rgb8] {
        &self.data
    }

    /// Mutable raw pixel data, row-major.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgb8] {
        &mut self.data
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds. Use
    /// [`get_pixel`](Self::get_pixel) for checked access.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Pixel at `(x, y)`, or [`Error::OutOfBounds`].
    ///
    /// Checked accessor for host-supplied coordinates, when the caller
    /// wants a reportable error rather than an `Option`.
    #[inline]
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Rgb8> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgb8) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = pixel;
    }

    /// Pixel row `y` as a slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterator over rows, top-to-bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb8]> + '_ {
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    /// Iterator over `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgb8)> + '_ {
        let w = self.width;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &px)| ((i as u32) % w.max(1), (i as u32) / w.max(1), px))
    }

    /// Converts back to nested rows (the host boundary representation).
    pub fn to_rows(&self) -> Vec<Vec<Rgb8>> {
        self.rows().map(<[Rgb8]>::to_vec).collect()
    }

    /// Applies a pure per-pixel function, returning a new image of the same
    /// dimensions. The input is never mutated.
    ///
    /// With the `parallel` feature (default), rows are processed with
    /// rayon; the function must therefore be `Sync`. Output is identical
    /// either way.
    #[cfg(feature = "parallel")]
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn(Rgb8) -> Rgb8 + Sync,
    {
        let w = self.width.max(1) as usize;
        let mut data = vec![[0u8, 0, 0]; self.data.len()];
        data.par_chunks_mut(w)
            .zip(self.data.par_chunks(w))
            .for_each(|(dst_row, src_row)| {
                for (dst, &src) in dst_row.iter_mut().zip(src_row) {
                    *dst = f(src);
                }
            });
        Image {
            data,
            width: self.width,
            height: self.height,
        }
    }

    /// Applies a pure per-pixel function, returning a new image of the same
    /// dimensions. The input is never mutated.
    #[cfg(not(feature = "parallel"))]
    pub fn map_pixels<F>(&self, f: F) -> Image
    where
        F: Fn(Rgb8) -> Rgb8,
    {
        Image {
            data: self.data.iter().map(|&px| f(px)).collect(),
            width: self.width,
            height: self.height,
        }
    }
}
