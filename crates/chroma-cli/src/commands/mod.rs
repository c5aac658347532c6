//! CLI command implementations

pub mod brightness_contrast;
pub mod color_balance;
pub mod hue_saturation;
pub mod levels;

use std::path::Path;

use anyhow::{bail, Context, Result};
use chroma_core::Image;
use chroma_nodes::NodeKind;

/// Load an image from path, converting to the 8-bit RGB grid nodes expect.
pub fn load_image(path: &Path) -> Result<Image> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    let data = img.pixels().map(|p| p.0).collect();
    Image::from_pixels(width, height, data)
        .with_context(|| format!("Malformed pixel grid: {}", path.display()))
}

/// Save an image to path; format inferred from the extension.
pub fn save_image(path: &Path, img: &Image) -> Result<()> {
    let (width, height) = img.dimensions();
    let mut out = image::RgbImage::new(width, height);
    for (x, y, px) in img.pixels() {
        out.put_pixel(x, y, image::Rgb(px));
    }
    out.save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Parse comma-separated RGB shift values.
pub fn parse_rgb(s: &str) -> Result<[f32; 3]> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        bail!("Expected 3 values (R,G,B), got {}", parts.len());
    }
    Ok([
        parts[0].trim().parse()?,
        parts[1].trim().parse()?,
        parts[2].trim().parse()?,
    ])
}

/// Print the node registry.
pub fn list_nodes() -> Result<()> {
    for kind in NodeKind::ALL {
        println!("{:<26} {}", kind.type_name(), kind.display_name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rgb_accepts_triples() {
        assert_eq!(parse_rgb("1,2,3").unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(parse_rgb(" -1.5, 0 , 2.25 ").unwrap(), [-1.5, 0.0, 2.25]);
    }

    #[test]
    fn parse_rgb_rejects_wrong_arity() {
        assert!(parse_rgb("1,2").is_err());
        assert!(parse_rgb("1,2,3,4").is_err());
        assert!(parse_rgb("1,x,3").is_err());
    }

    #[test]
    fn image_io_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        let mut img = Image::new(4, 3);
        for (i, px) in img.data_mut().iter_mut().enumerate() {
            *px = [(i * 20) as u8, (i * 10) as u8, 255 - (i * 20) as u8];
        }

        save_image(&path, &img).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, img);
    }
}
