//! CIE L* transfer function.
//!
//! The cube-root mapping at the heart of the XYZ <-> LAB conversion.
//! Below the threshold `delta = 6/29` the cube root is replaced by a
//! linear segment; the cube-root slope goes to infinity at zero and the
//! linear segment keeps the function (and its inverse) well behaved
//! there. Forward and inverse share the exact same threshold and segment
//! formulas so round trips stay consistent.
//!
//! # Reference
//!
//! CIE 15:2004, colorimetry section on CIELAB

/// Piecewise threshold `delta = 6/29`.
pub const DELTA: f32 = 6.0 / 29.0;

const DELTA_SQ: f32 = DELTA * DELTA;
const DELTA_CUBED: f32 = DELTA * DELTA * DELTA;

/// Forward transfer `f(t)`: normalized tristimulus to LAB-domain value.
///
/// # Formula
///
/// ```text
/// if t > delta^3:
///     f = t^(1/3)
/// else:
///     f = t / (3 * delta^2) + 4/29
/// ```
///
/// # Example
///
/// ```rust
/// use hcl_transfer::lstar::forward;
///
/// // L* of mid gray: 116 * f(0.184) - 16 ~= 50
/// let l = 116.0 * forward(0.184) - 16.0;
/// assert!((l - 50.0).abs() < 0.1);
/// ```
#[inline]
pub fn forward(t: f32) -> f32 {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA_SQ) + 4.0 / 29.0
    }
}

/// Inverse transfer `f^-1(t)`: LAB-domain value back to normalized
/// tristimulus.
///
/// # Formula
///
/// ```text
/// if t > delta:
///     f^-1 = t^3
/// else:
///     f^-1 = 3 * delta^2 * (t - 4/29)
/// ```
#[inline]
pub fn inverse(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA_SQ * (t - 4.0 / 29.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert_abs_diff_eq!(inverse(forward(t)), t, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_segments_meet_at_threshold() {
        // Both formulas must agree where the pieces join.
        let cube = DELTA * DELTA * DELTA;
        assert_abs_diff_eq!(forward(cube), DELTA, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse(DELTA), cube, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_maps_to_linear_segment() {
        // f(0) = 4/29, and the inverse takes it back to 0.
        assert_abs_diff_eq!(forward(0.0), 4.0 / 29.0, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse(4.0 / 29.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_white() {
        // f(1) = 1 gives L* = 100
        assert_abs_diff_eq!(forward(1.0), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(inverse(1.0), 1.0, epsilon = 1e-6);
    }
}
