//! Cylindrical HCL color type.
//!
//! [`Hcl`] is the user-facing representation: hue in degrees, chroma and
//! lightness as percentages. It is CIELAB in polar coordinates, so the
//! conversion to RGB starts by unrolling the angle back into Cartesian
//! a/b offsets.

use crate::lab::Lab;
use crate::rgb::Rgb;
use std::fmt;

/// A color in HCL (hue, chroma, lightness) space.
///
/// # Ranges
///
/// - `h`: hue angle in degrees, `[0, 360)`
/// - `c`: chroma, `[0, 100]`
/// - `l`: lightness, `[0, 100]`
///
/// Conversions returning an `Hcl` always produce integer-valued fields in
/// those ranges. Constructing one directly does not validate; intermediate
/// math tolerates out-of-range input and only outputs are clamped.
///
/// # Example
///
/// ```rust
/// use hcl_color::Hcl;
///
/// let blue = Hcl::new(240.0, 80.0, 60.0);
/// assert_eq!(blue.to_hex(), blue.to_rgb().to_hex());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hcl {
    /// Hue angle in degrees
    pub h: f32,
    /// Chroma (colorfulness)
    pub c: f32,
    /// Lightness
    pub l: f32,
}

impl Hcl {
    /// Mid gray: zero chroma at 50% lightness.
    ///
    /// The defined result of mixing an empty set of colors.
    pub const MID_GRAY: Self = Self::new(0.0, 0.0, 50.0);

    /// Creates a new HCL color.
    #[inline]
    pub const fn new(h: f32, c: f32, l: f32) -> Self {
        Self { h, c, l }
    }

    /// Converts to device sRGB.
    ///
    /// Runs HCL -> LAB -> XYZ -> linear sRGB -> gamma-encoded sRGB and
    /// clamps each channel to `[0, 255]` with round-to-nearest. Colors
    /// outside the sRGB gamut clip to the nearest representable value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hcl_color::Hcl;
    ///
    /// // Achromatic colors convert to pure grays regardless of hue
    /// let gray = Hcl::new(123.0, 0.0, 50.0).to_rgb();
    /// assert_eq!(gray.r, gray.g);
    /// assert_eq!(gray.g, gray.b);
    /// ```
    pub fn to_rgb(self) -> Rgb {
        let xyz = Lab::from_hcl(self).to_xyz();
        let encoded = crate::xyz::xyz_to_linear_rgb(xyz).map(hcl_transfer::srgb::oetf);
        Rgb::from_vec3(encoded)
    }

    /// Converts to a `#rrggbb` hex string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hcl_color::Hcl;
    ///
    /// assert_eq!(Hcl::new(0.0, 0.0, 100.0).to_hex(), "#ffffff");
    /// ```
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Collapses LAB back to polar coordinates, producing the normalized
    /// form handed to callers.
    ///
    /// This is the single clamp/round point for every path that returns an
    /// `Hcl`: hue from `atan2` is shifted into `[0, 360)` (wrapping a
    /// rounded 360 back to 0), chroma and lightness are rounded and
    /// clamped to `[0, 100]`.
    pub(crate) fn from_lab(lab: Lab) -> Self {
        let c = lab.a.hypot(lab.b).round().clamp(0.0, 100.0);
        let h = if c == 0.0 {
            // Achromatic: hue is visually meaningless and numerically
            // just atan2 of float noise, so pin it to 0
            0.0
        } else {
            let mut h = lab.b.atan2(lab.a).to_degrees();
            if h < 0.0 {
                h += 360.0;
            }
            let h = h.round();
            if h >= 360.0 { 0.0 } else { h }
        };
        Self {
            h,
            c,
            l: lab.l.round().clamp(0.0, 100.0),
        }
    }
}

impl fmt::Display for Hcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hcl({}, {}%, {}%)", self.h, self.c, self.l)
    }
}
