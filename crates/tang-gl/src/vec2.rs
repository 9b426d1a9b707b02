use crate::scalar::{almost_equal, sqrt_approx, AlmostEq};
use crate::Mat3;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn fill(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.fill(0.0, 0.0);
    }

    #[inline]
    pub fn assign(&mut self, other: &Vec2) {
        *self = *other;
    }

    #[inline]
    pub fn scale(&mut self, s: f32) {
        *self *= s;
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// 2D cross product (signed area of the parallelogram).
    #[inline]
    pub fn cross(self, rhs: Self) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    /// Rotate by +90°.
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    #[inline]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        sqrt_approx(self.length_sq())
    }

    /// Scale to unit length in place. A zero vector becomes non-finite.
    #[inline]
    pub fn normalize(&mut self) {
        let inv = 1.0 / self.length();
        self.scale(inv);
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let len = self.length();
        if len > 0.0 { Some(self / len) } else { None }
    }

    /// Apply a 2D homogeneous transform (point, translation included).
    #[inline]
    pub fn transform(&mut self, m: &Mat3) {
        let m = m.as_array();
        let t = *self;
        self.x = t.x * m[0] + t.y * m[3] + m[6];
        self.y = t.x * m[1] + t.y * m[4] + m[7];
    }
}

impl AlmostEq for Vec2 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x) && almost_equal(self.y, other.y)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(v: Vec2) -> Self {
        [v.x, v.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

// Scalar * Vec2 (commutative)
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl core::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_by_default() {
        assert_eq!(Vec2::default(), Vec2::zero());
    }

    #[test]
    fn length_of_four_three() {
        let mut v = Vec2::zero();
        v.fill(4.0, 3.0);
        assert!(almost_equal(v.length(), 5.0), "length = {}", v.length());
        v.normalize();
        assert!(almost_equal(v.length(), 1.0), "normalized length = {}", v.length());
    }

    #[test]
    fn add_to_self_doubles() {
        let mut v = Vec2::new(0.8, 0.6);
        v += v;
        assert!(v.almost_eq(&Vec2::new(1.6, 1.2)));
        assert!(almost_equal(v.dot(v), 4.0));
    }

    #[test]
    fn subtract_and_scale() {
        let mut v = Vec2::new(1.6, 1.2);
        v -= Vec2::new(0.6, 0.2);
        assert!(v.almost_eq(&Vec2::new(1.0, 1.0)));
        v.scale(5.0);
        assert!(v.almost_eq(&Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn identity_transform_is_noop() {
        let mut v = Vec2::new(1.0, 1.0);
        v.transform(&Mat3::identity());
        assert_eq!(v, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn transform_translates_and_scales() {
        let mut v = Vec2::new(1.0, 2.0);
        let mut m = Mat3::translation(10.0, 20.0);
        m.multiply(&Mat3::scaling(2.0, 3.0));
        v.transform(&m);
        assert_eq!(v, Vec2::new(12.0, 26.0));
    }

    #[test]
    fn cross_and_perp() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.perp(), b);
    }

    #[test]
    fn assign_and_reflexive_equality() {
        let mut v = Vec2::zero();
        v.assign(&Vec2::new(3.0, -2.0));
        assert_eq!(v, Vec2::new(3.0, -2.0));
        assert!(v.almost_eq(&v));
        v.set_zero();
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn try_normalize_zero() {
        assert!(Vec2::zero().try_normalize().is_none());
    }
}
