//! hcl - HCL color conversion and mixing CLI
//!
//! Thin front end over `hcl-color`: converts single colors between HCL,
//! RGB, and hex notation, and mixes several colors in LAB space.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "hcl")]
#[command(author, version, about = "HCL color conversion and mixing")]
#[command(long_about = "
Convert colors between HCL, sRGB, and hex notation, and mix colors
perceptually by averaging in LAB space.

Examples:
  hcl convert --hcl 240,80,60        # HCL -> RGB and hex
  hcl convert --rgb 72,116,255       # RGB -> HCL and hex
  hcl convert --hex '#aa74ee'        # hex -> HCL and RGB
  hcl mix 240,80,60 0,70,50          # LAB-average two HCL colors
  hcl mix '#ff0000' '#0000ff'        # hex inputs work too
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
    /// Convert a single color between representations
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Mix two or more colors in LAB space
    #[command(visible_alias = "m")]
    Mix(MixArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// Input as H,C,L (hue degrees, chroma %, lightness %)
    #[arg(long)]
    hcl: Option<String>,

    /// Input as R,G,B (0-255 per channel)
    #[arg(long)]
    rgb: Option<String>,

    /// Input as a hex string (#rrggbb)
    #[arg(long)]
    hex: Option<String>,
}

#[derive(Args)]
struct MixArgs {
    /// Colors as H,C,L triples or hex strings
    #[arg(required = true)]
    colors: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Mix(args) => commands::mix::run(args, cli.verbose),
    }
}
