//! Perceptually uniform color mixing.
//!
//! Mixing averages colors in LAB, not in HCL or RGB. Averaging hue angles
//! breaks down across the 0/360 degree wrap, and averaging gamma-encoded
//! RGB shifts perceived brightness; LAB's Cartesian axes make a plain
//! component-wise mean do the right thing for both.

use crate::hcl::Hcl;
use crate::lab::Lab;

/// Mixes a sequence of HCL colors into one.
///
/// Computes the unweighted arithmetic mean of the inputs' LAB coordinates
/// and converts the mean back to HCL with the usual clamp/round. The mean
/// is order-independent; inputs carry no weights.
///
/// Two degenerate cases are defined rather than failing:
///
/// - an empty slice yields [`Hcl::MID_GRAY`]
/// - a single color is returned unchanged, skipping the LAB round trip
///   and its rounding loss
///
/// # Example
///
/// ```rust
/// use hcl_color::{mix, Hcl};
///
/// let blue = Hcl::new(240.0, 80.0, 60.0);
/// let red = Hcl::new(0.0, 70.0, 50.0);
///
/// let blend = mix(&[blue, red]);
/// assert_eq!(blend, Hcl::new(293.0, 38.0, 55.0));
/// assert_eq!(mix(&[]), Hcl::MID_GRAY);
/// assert_eq!(mix(&[blue]), blue);
/// ```
pub fn mix(colors: &[Hcl]) -> Hcl {
    match colors {
        [] => Hcl::MID_GRAY,
        [only] => *only,
        _ => {
            let mut sum = Lab { l: 0.0, a: 0.0, b: 0.0 };
            for &color in colors {
                let lab = Lab::from_hcl(color);
                sum.l += lab.l;
                sum.a += lab.a;
                sum.b += lab.b;
            }
            let n = colors.len() as f32;
            Hcl::from_lab(Lab {
                l: sum.l / n,
                a: sum.a / n,
                b: sum.b / n,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_empty_yields_mid_gray() {
        assert_eq!(mix(&[]), Hcl::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn test_single_color_unchanged() {
        // Returned as-is, including values rounding would alter
        let color = Hcl::new(197.3, 42.6, 61.1);
        assert_eq!(mix(&[color]), color);
    }

    #[test]
    fn test_blue_red_lab_means() {
        // Pins the algorithm itself: the LAB intermediates of the blend
        // must be the exact arithmetic means of the inputs' coordinates.
        let blue = Hcl::new(240.0, 80.0, 60.0);
        let red = Hcl::new(0.0, 70.0, 50.0);

        let blue_lab = Lab::from_hcl(blue);
        let red_lab = Lab::from_hcl(red);
        assert_abs_diff_eq!(blue_lab.a, -40.0, epsilon = 1e-3);
        assert_abs_diff_eq!(blue_lab.b, -69.282, epsilon = 1e-2);
        assert_abs_diff_eq!(red_lab.a, 70.0, epsilon = 1e-3);
        assert_abs_diff_eq!(red_lab.b, 0.0, epsilon = 1e-3);

        let mean = Lab {
            l: (blue_lab.l + red_lab.l) / 2.0,
            a: (blue_lab.a + red_lab.a) / 2.0,
            b: (blue_lab.b + red_lab.b) / 2.0,
        };
        assert_abs_diff_eq!(mean.l, 55.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mean.a, 15.0, epsilon = 1e-3);
        assert_abs_diff_eq!(mean.b, -34.641, epsilon = 1e-2);

        // The blend is that mean, collapsed back to polar form: a muted
        // violet rather than the muddy result an RGB average would give.
        assert_eq!(mix(&[blue, red]), Hcl::from_lab(mean));
        assert_eq!(mix(&[blue, red]), Hcl::new(293.0, 38.0, 55.0));
    }

    #[test]
    fn test_order_independent() {
        let a = Hcl::new(30.0, 60.0, 70.0);
        let b = Hcl::new(200.0, 40.0, 35.0);
        let c = Hcl::new(310.0, 20.0, 55.0);
        assert_eq!(mix(&[a, b]), mix(&[b, a]));
        assert_eq!(mix(&[a, b, c]), mix(&[c, b, a]));
    }

    #[test]
    fn test_hue_wrap_boundary() {
        // 350 and 10 degrees straddle the wrap; the LAB mean lands near 0,
        // not near the naive angle average of 180.
        let blend = mix(&[Hcl::new(350.0, 50.0, 50.0), Hcl::new(10.0, 50.0, 50.0)]);
        assert!(blend.h <= 1.0 || blend.h >= 359.0, "h = {}", blend.h);
        assert_eq!(blend.l, 50.0);
    }

    #[test]
    fn test_achromatic_inputs() {
        let blend = mix(&[Hcl::new(0.0, 0.0, 20.0), Hcl::new(120.0, 0.0, 80.0)]);
        assert_eq!(blend, Hcl::new(0.0, 0.0, 50.0));
    }
}
