//! CLI command implementations

pub mod convert;
pub mod mix;

use anyhow::{bail, Context, Result};
use hcl_color::{Hcl, Rgb};

/// Parses a comma-separated H,C,L triple like `240,80,60`.
pub fn parse_hcl(s: &str) -> Result<Hcl> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected H,C,L with three components, got {s:?}");
    }
    let mut values = [0.0_f32; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse()
            .with_context(|| format!("invalid number {part:?} in {s:?}"))?;
    }
    Ok(Hcl::new(values[0], values[1], values[2]))
}

/// Parses a comma-separated R,G,B triple like `72,116,255`.
pub fn parse_rgb(s: &str) -> Result<Rgb> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected R,G,B with three components, got {s:?}");
    }
    let mut channels = [0_u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        *channel = part
            .parse()
            .with_context(|| format!("invalid channel {part:?} in {s:?} (0-255)"))?;
    }
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

/// Parses a color argument as either an H,C,L triple or a hex string.
pub fn parse_color(s: &str) -> Result<Hcl> {
    if s.contains(',') {
        parse_hcl(s)
    } else {
        let rgb = Rgb::parse_hex(s).with_context(|| format!("invalid color {s:?}"))?;
        Ok(rgb.to_hcl())
    }
}

/// Prints a color in all three notations.
pub fn print_color(hcl: Hcl, rgb: Rgb) {
    println!("hcl  {hcl}");
    println!("rgb  rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    println!("hex  {}", rgb.to_hex());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hcl() {
        assert_eq!(parse_hcl("240,80,60").unwrap(), Hcl::new(240.0, 80.0, 60.0));
        assert_eq!(parse_hcl(" 240, 80, 60 ").unwrap(), Hcl::new(240.0, 80.0, 60.0));
        assert!(parse_hcl("240,80").is_err());
        assert!(parse_hcl("240,80,x").is_err());
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("72,116,255").unwrap(), Rgb::new(72, 116, 255));
        assert!(parse_rgb("72,116,256").is_err());
        assert!(parse_rgb("72,116").is_err());
    }

    #[test]
    fn test_parse_color_dispatches() {
        assert_eq!(parse_color("0,0,50").unwrap(), Hcl::new(0.0, 0.0, 50.0));
        // Hex input converts through RGB
        assert_eq!(parse_color("#ffffff").unwrap(), Hcl::new(0.0, 0.0, 100.0));
        assert!(parse_color("nope").is_err());
    }
}
