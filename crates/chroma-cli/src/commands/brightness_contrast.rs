//! Brightness/contrast command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use chroma_nodes::{AdjustmentNode, BrightnessContrastNode};

use super::{load_image, save_image};

/// Arguments for the `bc` command.
#[derive(Args)]
pub struct BrightnessContrastArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Additive brightness offset (channel units, may be negative)
    #[arg(short, long, default_value = "0.0", allow_hyphen_values = true)]
    pub brightness: f32,

    /// Contrast multiplier (1.0 = unchanged)
    #[arg(short, long, default_value = "1.0")]
    pub contrast: f32,
}

/// Run the brightness/contrast command.
pub fn run(args: BrightnessContrastArgs) -> Result<()> {
    let node = BrightnessContrastNode::try_new(args.brightness, args.contrast)?;
    info!(
        brightness = node.brightness,
        contrast = node.contrast,
        input = %args.input.display(),
        "Applying brightness/contrast"
    );

    let image = load_image(&args.input)?;
    let output = node.process(&image);
    save_image(&args.output, &output)?;
    info!(output = %args.output.display(), "Saved");

    Ok(())
}
