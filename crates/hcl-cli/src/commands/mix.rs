//! Color mixing command.
//!
//! Parses each argument as H,C,L or hex, averages them in LAB space, and
//! prints the blend.

use crate::MixArgs;
use anyhow::Result;
use hcl_color::mix;
use tracing::{debug, trace};

pub fn run(args: MixArgs, verbose: bool) -> Result<()> {
    trace!(count = args.colors.len(), "mix::run");

    let colors = args
        .colors
        .iter()
        .map(|s| super::parse_color(s))
        .collect::<Result<Vec<_>>>()?;

    if verbose {
        for (arg, hcl) in args.colors.iter().zip(&colors) {
            println!("in   {arg} -> {hcl}");
        }
    }

    let blend = mix(&colors);
    debug!(%blend, "mixed");

    super::print_color(blend, blend.to_rgb());
    Ok(())
}
