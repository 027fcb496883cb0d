//! Hex string encoding and decoding.
//!
//! Output is always lowercase `#rrggbb`. Input accepts six hex digits in
//! either case with an optional leading `#`.

use crate::error::HexParseError;
use crate::rgb::Rgb;

/// Encodes an RGB color as `#rrggbb`.
pub(crate) fn encode(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Decodes a hex string.
pub(crate) fn decode(s: &str) -> Result<Rgb, HexParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();
    if digits.len() != 6 {
        return Err(HexParseError::InvalidLength(digits.len()));
    }
    let mut channels = [0u8; 3];
    for (i, pair) in digits.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0]).ok_or_else(|| HexParseError::InvalidDigit(s.to_string()))?;
        let lo = nibble(pair[1]).ok_or_else(|| HexParseError::InvalidDigit(s.to_string()))?;
        channels[i] = hi << 4 | lo;
    }
    Ok(Rgb::new(channels[0], channels[1], channels[2]))
}

#[inline]
fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
