//! Device sRGB color type.

use crate::error::HexParseError;
use crate::hcl::Hcl;
use crate::hex;
use crate::lab::Lab;
use hcl_math::Vec3;
use std::fmt;

/// A gamma-encoded sRGB color with 8-bit channels.
///
/// The displayable end of the conversion chain. Channels are always
/// integers in `[0, 255]`; conversions round to nearest and clamp before
/// narrowing.
///
/// # Example
///
/// ```rust
/// use hcl_color::Rgb;
///
/// let coral = Rgb::new(255, 127, 80);
/// assert_eq!(coral.to_hex(), "#ff7f50");
/// assert_eq!(Rgb::from_hex("#FF7F50"), coral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0).
    ///
    /// Also the fallback value for malformed hex input in [`Rgb::from_hex`].
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts to HCL.
    ///
    /// Runs sRGB -> linear -> XYZ -> LAB -> HCL. The result has hue in
    /// `[0, 360)` and chroma/lightness clamped to `[0, 100]`, rounded to
    /// integers. Saturated primaries exceed chroma 100 in LAB and clamp.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hcl_color::Rgb;
    ///
    /// let hcl = Rgb::new(255, 0, 0).to_hcl();
    /// assert_eq!(hcl.c, 100.0); // clamped from ~104.6
    /// ```
    pub fn to_hcl(self) -> Hcl {
        let linear = self.to_vec3().map(hcl_transfer::srgb::eotf);
        let xyz = crate::xyz::linear_rgb_to_xyz(linear);
        Hcl::from_lab(Lab::from_xyz(xyz))
    }

    /// Converts to a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        hex::encode(self)
    }

    /// Parses a hex string, falling back to black on malformed input.
    ///
    /// Accepts `rrggbb` with an optional leading `#`, case-insensitive.
    /// Anything else yields [`Rgb::BLACK`] instead of an error, so the
    /// function is safe to call straight from input handlers. Use
    /// [`Rgb::parse_hex`] when failures should be surfaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hcl_color::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#336699"), Rgb::new(0x33, 0x66, 0x99));
    /// assert_eq!(Rgb::from_hex("not-a-color"), Rgb::BLACK);
    /// ```
    pub fn from_hex(s: &str) -> Self {
        hex::decode(s).unwrap_or_default()
    }

    /// Parses a hex string, reporting malformed input.
    ///
    /// The strict counterpart of [`Rgb::from_hex`].
    ///
    /// # Errors
    ///
    /// Returns [`HexParseError`] when the input is not six hex digits with
    /// an optional leading `#`.
    pub fn parse_hex(s: &str) -> Result<Self, HexParseError> {
        hex::decode(s)
    }

    /// Encoded channels as a `[0, 1]` float triplet.
    #[inline]
    pub(crate) fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    /// Quantizes an encoded `[0, 1]` triplet to 8-bit channels.
    ///
    /// Out-of-range components (out-of-gamut colors) clamp to the nearest
    /// representable channel value.
    #[inline]
    pub(crate) fn from_vec3(v: Vec3) -> Self {
        let [r, g, b] = (v.clamp01() * 255.0).to_array();
        Self::new(r.round() as u8, g.round() as u8, b.round() as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec3_clamps() {
        let rgb = Rgb::from_vec3(Vec3::new(-0.2, 0.5, 1.3));
        assert_eq!(rgb, Rgb::new(0, 128, 255));
    }

    #[test]
    fn test_from_vec3_rounds_to_nearest() {
        // 0.5019 * 255 = 127.98 -> 128
        let rgb = Rgb::from_vec3(Vec3::splat(0.5019));
        assert_eq!(rgb, Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_to_vec3_range() {
        let v = Rgb::WHITE.to_vec3();
        assert_eq!(v, Vec3::ONE);
        assert_eq!(Rgb::BLACK.to_vec3(), Vec3::ZERO);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(Rgb::new(170, 187, 204).to_string(), "#aabbcc");
    }
}
