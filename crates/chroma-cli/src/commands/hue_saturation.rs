//! Hue/saturation command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use chroma_nodes::{AdjustmentNode, HueSaturationNode};

use super::{load_image, save_image};

/// Arguments for the `hue-sat` command.
#[derive(Args)]
pub struct HueSatArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Hue shift as a fraction of a full turn (0.5 = opposite hue)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub hue: f32,

    /// Saturation multiplier (0 = grayscale, 1 = unchanged)
    #[arg(short, long, default_value = "1.0")]
    pub saturation: f32,
}

/// Run the hue/saturation command.
pub fn run(args: HueSatArgs) -> Result<()> {
    let node = HueSaturationNode::try_new(args.hue, args.saturation)?;
    info!(
        hue = node.hue,
        saturation = node.saturation,
        input = %args.input.display(),
        "Applying hue/saturation"
    );

    let image = load_image(&args.input)?;
    let output = node.process(&image);
    save_image(&args.output, &output)?;
    info!(output = %args.output.display(), "Saved");

    Ok(())
}
