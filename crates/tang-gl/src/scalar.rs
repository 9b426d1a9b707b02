//! Scalar approximations backing the vector and matrix types.
//!
//! Everything here trades accuracy for speed: square roots come from the
//! bit-level inverse square root trick and trig from a range-reduced
//! parabola. Equality is a fixed absolute tolerance of [`EPSILON`].

pub const PI: f32 = core::f32::consts::PI;

/// Multiply degrees by this to get radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RAD_TO_DEG: f32 = 180.0 / PI;

/// Absolute tolerance used by every approximate comparison in the crate.
pub const EPSILON: f32 = 1.0 / 64.0;

/// Magic constant for [`fast_inv_sqrt`] (Lomont's refinement of `0x5f3759df`).
pub const INV_SQRT_MAGIC: u32 = 0x5f37_5a86;

// 1.5 * 2^24: adding it to an f32 below 2^23 in magnitude rounds to a multiple of two.
const ROUND_TO_EVEN: f32 = 25_165_824.0;

const SIN_Q: f32 = 3.1;
const SIN_P: f32 = 3.6;

const SIGN_MASK: u32 = 0x8000_0000;

/// Approximate `1/sqrt(x)` with one Newton-Raphson refinement.
///
/// Only meaningful for positive, normal `x`.
#[inline]
pub fn fast_inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let i = INV_SQRT_MAGIC.wrapping_sub(x.to_bits() >> 1);
    let y = f32::from_bits(i);
    y * (1.5 - half * y * y)
}

/// Approximate `sqrt(x)` as `x * fast_inv_sqrt(x)`.
///
/// Relative error stays under 1% for positive normal inputs; `sqrt_approx(0.0)`
/// is exactly zero. Negative and NaN inputs give unspecified results.
#[inline]
pub fn sqrt_approx(x: f32) -> f32 {
    x * fast_inv_sqrt(x)
}

// Sine of `t` half-turns (t = radians / PI).
#[inline]
fn sin_half_turns(t: f32) -> f32 {
    let z = t + ROUND_TO_EVEN;
    let t = t - (z - ROUND_TO_EVEN);
    let y = t - t * abs(t);
    y * (SIN_Q + SIN_P * abs(y))
}

/// Polynomial sine approximation, exact at multiples of 90°.
#[inline]
pub fn sin_approx(radians: f32) -> f32 {
    sin_half_turns(radians * (1.0 / PI))
}

/// Polynomial cosine approximation: [`sin_approx`] shifted by a quarter turn.
#[inline]
pub fn cos_approx(radians: f32) -> f32 {
    sin_half_turns(radians * (1.0 / PI) + 0.5)
}

/// `(sin_approx(radians), cos_approx(radians))`
#[inline]
pub fn sin_cos_approx(radians: f32) -> (f32, f32) {
    let t = radians * (1.0 / PI);
    (sin_half_turns(t), sin_half_turns(t + 0.5))
}

/// True iff `a` and `b` differ by less than [`EPSILON`]. NaN is never equal.
#[inline]
pub fn almost_equal(a: f32, b: f32) -> bool {
    a + EPSILON > b && a - EPSILON < b
}

#[inline]
pub fn abs(x: f32) -> f32 {
    f32::from_bits(x.to_bits() & !SIGN_MASK)
}

#[inline]
pub fn min(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

#[inline]
pub fn max(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

#[inline]
pub fn square(x: f32) -> f32 {
    x * x
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Component-wise approximate equality within [`EPSILON`].
pub trait AlmostEq {
    fn almost_eq(&self, other: &Self) -> bool;
}

impl AlmostEq for f32 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(*self, *other)
    }
}

impl<const N: usize> AlmostEq for [f32; N] {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| almost_equal(*a, *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_error(expected: f32, got: f32) -> f32 {
        max(expected, got) / min(expected, got) - 1.0
    }

    #[test]
    fn sqrt_known_values() {
        for &(x, expected) in &[(1.5, 1.224744871), (5.5, 2.34520788), (10.25, 3.201562119)] {
            let got = sqrt_approx(x);
            assert!(
                relative_error(expected, got) < 0.01,
                "sqrt_approx({}) = {}, expected {}",
                x,
                got,
                expected
            );
        }
    }

    #[test]
    fn sqrt_zero_is_zero() {
        assert_eq!(sqrt_approx(0.0), 0.0);
    }

    #[test]
    fn inv_sqrt_of_four() {
        assert!(abs(fast_inv_sqrt(4.0) - 0.5) < 0.005);
    }

    #[test]
    fn trig_quadrants() {
        assert!(almost_equal(cos_approx(deg_to_rad(360.0)), 1.0));
        assert!(almost_equal(sin_approx(deg_to_rad(90.0)), 1.0));
        assert!(almost_equal(cos_approx(deg_to_rad(180.0)), -1.0));
        assert!(almost_equal(sin_approx(deg_to_rad(270.0)), -1.0));
        assert!(almost_equal(sin_approx(0.0), 0.0));
        assert!(almost_equal(cos_approx(0.0), 1.0));
    }

    #[test]
    fn cos_45_degrees() {
        let c = cos_approx(deg_to_rad(45.0));
        assert!(almost_equal(c, 0.7071), "cos(45°) = {}", c);
    }

    #[test]
    fn sin_cos_pair_matches_singles() {
        let r = 1.234;
        let (s, c) = sin_cos_approx(r);
        assert_eq!(s, sin_approx(r));
        assert_eq!(c, cos_approx(r));
    }

    #[test]
    fn sin_is_odd() {
        for i in 1..32 {
            let r = i as f32 * 0.2;
            assert!(abs(sin_approx(r) + sin_approx(-r)) < 1e-6);
        }
    }

    #[test]
    fn almost_equal_tolerance() {
        assert!(almost_equal(1.0, 1.0 + EPSILON * 0.5));
        assert!(!almost_equal(1.0, 1.0 + EPSILON * 2.0));
        assert!(!almost_equal(f32::NAN, f32::NAN));
    }

    #[test]
    fn helpers() {
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(abs(2.0), 2.0);
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(square(3.0), 9.0);
        assert!(almost_equal(rad_to_deg(deg_to_rad(123.0)), 123.0));
    }
}
