//! Single color conversion command.
//!
//! Takes one color in any notation and prints all three.

use crate::ConvertArgs;
use anyhow::{bail, Context, Result};
use hcl_color::Rgb;
use tracing::{debug, trace};

pub fn run(args: ConvertArgs, verbose: bool) -> Result<()> {
    trace!(
        hcl = args.hcl.as_deref(),
        rgb = args.rgb.as_deref(),
        hex = args.hex.as_deref(),
        "convert::run"
    );

    let (hcl, rgb) = match (&args.hcl, &args.rgb, &args.hex) {
        (Some(s), None, None) => {
            let hcl = super::parse_hcl(s)?;
            (hcl, hcl.to_rgb())
        }
        (None, Some(s), None) => {
            let rgb = super::parse_rgb(s)?;
            (rgb.to_hcl(), rgb)
        }
        (None, None, Some(s)) => {
            let rgb = Rgb::parse_hex(s).with_context(|| format!("invalid hex color {s:?}"))?;
            (rgb.to_hcl(), rgb)
        }
        _ => bail!("provide exactly one of --hcl, --rgb, --hex"),
    };
    debug!(%hcl, %rgb, "converted");

    if verbose && args.hcl.is_some() {
        // Round-tripping through RGB reveals gamut clipping
        let back = rgb.to_hcl();
        if (back.c - hcl.c).abs() > 2.0 || (back.l - hcl.l).abs() > 2.0 {
            println!("note: color is outside the sRGB gamut and was clipped");
        }
    }

    super::print_color(hcl, rgb);
    Ok(())
}
