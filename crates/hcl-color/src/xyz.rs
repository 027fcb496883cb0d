//! CIE XYZ step: D65 reference white and the fixed sRGB matrices.
//!
//! XYZ values here use the percent scale (Y = 100 for reference white),
//! matching the LAB conversion; the published matrices are normalized to
//! Y = 1, so the linear-RGB helpers rescale at the boundary.

use hcl_math::{Mat3, Vec3};

/// D65 illuminant reference white, percent scale.
pub(crate) const D65_WHITE: Vec3 = Vec3::new(95.047, 100.0, 108.883);

/// Linear sRGB to XYZ (D65), Y = 1 scale.
pub(crate) const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// XYZ (D65) to linear sRGB, Y = 1 scale.
pub(crate) const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Converts linear sRGB in [0, 1] to XYZ on the percent scale.
#[inline]
pub(crate) fn linear_rgb_to_xyz(rgb: Vec3) -> Vec3 {
    (SRGB_TO_XYZ * rgb) * 100.0
}

/// Converts XYZ on the percent scale to linear sRGB in [0, 1].
///
/// The result is unclamped; out-of-gamut XYZ produces components outside
/// [0, 1] for the caller to resolve at quantization.
#[inline]
pub(crate) fn xyz_to_linear_rgb(xyz: Vec3) -> Vec3 {
    (XYZ_TO_SRGB * xyz) / 100.0
}
