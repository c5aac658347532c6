//! Levels command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use chroma_nodes::{AdjustmentNode, LevelsNode};

use super::{load_image, save_image};

/// Arguments for the `levels` command.
#[derive(Args)]
pub struct LevelsArgs {
    /// Input image
    pub input: PathBuf,

    /// Output image
    #[arg(short, long)]
    pub output: PathBuf,

    /// Input value mapped to 0
    #[arg(short, long, default_value = "0.0")]
    pub black: f32,

    /// Input value mapped to 255
    #[arg(short, long, default_value = "255.0")]
    pub white: f32,
}

/// Run the levels command.
pub fn run(args: LevelsArgs) -> Result<()> {
    let node = LevelsNode::try_new(args.black, args.white)?;
    info!(
        black = node.black_point,
        white = node.white_point,
        input = %args.input.display(),
        "Applying levels"
    );

    let image = load_image(&args.input)?;
    let output = node.process(&image);
    save_image(&args.output, &output)?;
    info!(output = %args.output.display(), "Saved");

    Ok(())
}
