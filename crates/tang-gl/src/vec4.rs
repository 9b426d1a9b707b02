use crate::scalar::{almost_equal, sqrt_approx, AlmostEq};
use crate::{Mat4, Vec3};
use core::ops::{Add, Sub, Mul, Div, Neg, AddAssign, SubAssign, MulAssign};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self { Self { x, y, z, w } }

    #[inline]
    pub const fn zero() -> Self { Self::new(0.0, 0.0, 0.0, 0.0) }

    #[inline]
    pub const fn splat(v: f32) -> Self { Self::new(v, v, v, v) }

    #[inline]
    pub fn fill(&mut self, x: f32, y: f32, z: f32, w: f32) {
        *self = Self::new(x, y, z, w);
    }

    #[inline]
    pub fn set_zero(&mut self) { *self = Self::zero(); }

    #[inline]
    pub fn assign(&mut self, other: &Vec4) { *self = *other; }

    #[inline]
    pub fn scale(&mut self, s: f32) { *self *= s; }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Homogeneous cross product: xyz becomes `self.xyz × rhs.xyz`, w is kept.
    #[inline]
    pub fn cross(&mut self, rhs: &Vec4) {
        let c = self.truncate().cross(rhs.truncate());
        self.x = c.x;
        self.y = c.y;
        self.z = c.z;
    }

    #[inline]
    pub fn length_sq(self) -> f32 { self.dot(self) }

    #[inline]
    pub fn length(self) -> f32 { sqrt_approx(self.length_sq()) }

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

    /// Truncate to Vec3 (drop w)
    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn transform(&mut self, m: &Mat4) {
        *self = m.mul_vec4(*self);
    }
}

impl AlmostEq for Vec4 {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.z, other.z)
            && almost_equal(self.w, other.w)
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(a: [f32; 4]) -> Self { Self::new(a[0], a[1], a[2], a[3]) }
}

impl From<Vec4> for [f32; 4] {
    fn from(v: Vec4) -> Self { [v.x, v.y, v.z, v.w] }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl AddAssign for Vec4 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl SubAssign for Vec4 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl MulAssign<f32> for Vec4 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Vec4) -> Vec4 { rhs * self }
}

impl core::fmt::Display for Vec4 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
