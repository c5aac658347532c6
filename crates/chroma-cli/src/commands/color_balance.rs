//! Color balance command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use chroma_nodes::{AdjustmentNode, ColorBalanceNode};

use super::{load_image, parse_rgb, save_image};

/// Arguments for the `balance` command.
#[derive(Args)]
pub struct BalanceArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Shadow shift (R,G,B). Default: 0,0,0
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    pub shadows: String,

    /// Midtone shift (R,G,B). Default: 0,0,0
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    pub midtones: String,

    /// Highlight shift (R,G,B). Default: 0,0,0
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    pub highlights: String,
}

/// Run the color balance command.
pub fn run(args: BalanceArgs) -> Result<()> {
    let shadows = parse_rgb(&args.shadows)?;
    let midtones = parse_rgb(&args.midtones)?;
    let highlights = parse_rgb(&args.highlights)?;

    let node = ColorBalanceNode::try_new(shadows, midtones, highlights)?;
    info!(
        shadows = ?node.shadows,
        midtones = ?node.midtones,
        highlights = ?node.highlights,
        input = %args.input.display(),
        "Applying color balance"
    );

    let image = load_image(&args.input)?;
    let output = node.process(&image);
    save_image(&args.output, &output)?;
    info!(output = %args.output.display(), "Saved");

    Ok(())
}
