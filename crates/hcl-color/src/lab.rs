//! Cartesian CIELAB intermediate.
//!
//! `Lab` never crosses the public API boundary. It exists as the midpoint
//! of the HCL <-> RGB chain and as the space where mixing averages its
//! inputs: a and b are Cartesian, so a component-wise mean behaves
//! correctly across the 0/360 degree hue wrap where averaging angles
//! would not.

use crate::hcl::Hcl;
use crate::xyz;
use hcl_math::Vec3;
use hcl_transfer::lstar;

/// A color in CIELAB space. Unclamped; values outside the nominal ranges
/// are carried through and only resolved when converting back to [`Hcl`]
/// or RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lab {
    /// Lightness, nominally [0, 100]
    pub l: f32,
    /// Green-red axis, roughly [-128, 127]
    pub a: f32,
    /// Blue-yellow axis, roughly [-128, 127]
    pub b: f32,
}

impl Lab {
    /// Unrolls polar HCL into Cartesian a/b offsets. Lightness passes
    /// through unchanged.
    pub(crate) fn from_hcl(hcl: Hcl) -> Self {
        let (sin_h, cos_h) = hcl.h.to_radians().sin_cos();
        Self {
            l: hcl.l,
            a: hcl.c * cos_h,
            b: hcl.c * sin_h,
        }
    }

    /// Converts XYZ (D65, percent scale) to LAB.
    pub(crate) fn from_xyz(xyz: Vec3) -> Self {
        let f = (xyz / xyz::D65_WHITE).map(lstar::forward);
        Self {
            l: 116.0 * f.y - 16.0,
            a: 500.0 * (f.x - f.y),
            b: 200.0 * (f.y - f.z),
        }
    }

    /// Converts LAB to XYZ (D65, percent scale).
    pub(crate) fn to_xyz(self) -> Vec3 {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        Vec3::new(lstar::inverse(fx), lstar::inverse(fy), lstar::inverse(fz)) * xyz::D65_WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_hcl_quadrants() {
        let lab = Lab::from_hcl(Hcl::new(0.0, 50.0, 40.0));
        assert_abs_diff_eq!(lab.a, 50.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab.b, 0.0, epsilon = 1e-3);

        let lab = Lab::from_hcl(Hcl::new(90.0, 50.0, 40.0));
        assert_abs_diff_eq!(lab.a, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab.b, 50.0, epsilon = 1e-3);

        let lab = Lab::from_hcl(Hcl::new(240.0, 80.0, 60.0));
        assert_abs_diff_eq!(lab.a, -40.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lab.b, -69.282, epsilon = 1e-2);
    }

    #[test]
    fn test_lightness_passes_through() {
        let lab = Lab::from_hcl(Hcl::new(123.0, 45.0, 67.0));
        assert_eq!(lab.l, 67.0);
    }

    #[test]
    fn test_xyz_roundtrip() {
        let lab = Lab { l: 60.0, a: 25.0, b: -40.0 };
        let back = Lab::from_xyz(lab.to_xyz());
        assert_abs_diff_eq!(back.l, lab.l, epsilon = 1e-3);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 1e-3);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 1e-3);
    }

    #[test]
    fn test_white_point() {
        // L*=100 at zero chroma is exactly the reference white
        let xyz = Lab { l: 100.0, a: 0.0, b: 0.0 }.to_xyz();
        assert_abs_diff_eq!(xyz.x, 95.047, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y, 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.z, 108.883, epsilon = 1e-3);
    }

    #[test]
    fn test_black() {
        let xyz = Lab { l: 0.0, a: 0.0, b: 0.0 }.to_xyz();
        assert_abs_diff_eq!(xyz.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.y, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(xyz.z, 0.0, epsilon = 1e-3);
    }
}
