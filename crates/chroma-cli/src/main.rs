//! chroma - command-line harness for the chroma-rs adjustment nodes
//!
//! Stands in for a host pipeline editor: loads an image, applies a single
//! node, saves the result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "chroma")]
#[command(author, version, about = "Image adjustment nodes CLI")]
#[command(long_about = "
Applies a single chroma-rs adjustment node to an image.

Examples:
  chroma bc input.png -o out.png --brightness 20 --contrast 1.2
  chroma levels input.png -o out.png --black 16 --white 235
  chroma hue-sat input.png -o out.png --hue 0.5 --saturation 0.8
  chroma balance input.png -o out.png --shadows 10,0,-10
  chroma nodes
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Brightness/contrast adjustment
    #[command(name = "bc", visible_alias = "brightness-contrast")]
    BrightnessContrast(commands::brightness_contrast::BrightnessContrastArgs),

    /// Black/white point levels remap
    Levels(commands::levels::LevelsArgs),

    /// Hue rotation and saturation scale
    #[command(name = "hue-sat")]
    HueSat(commands::hue_saturation::HueSatArgs),

    /// Per-luminance-band color balance
    Balance(commands::color_balance::BalanceArgs),

    /// List registered node types
    Nodes,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::BrightnessContrast(args) => commands::brightness_contrast::run(args),
        Commands::Levels(args) => commands::levels::run(args),
        Commands::HueSat(args) => commands::hue_saturation::run(args),
        Commands::Balance(args) => commands::color_balance::run(args),
        Commands::Nodes => commands::list_nodes(),
    }
}
