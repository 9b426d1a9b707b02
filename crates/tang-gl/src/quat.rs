use crate::scalar::{almost_equal, sin_cos_approx, sqrt_approx, AlmostEq};
use crate::{Mat3, Mat4, Vec3};

/// Quaternion: xi + yj + zk + w
///
/// Represents rotations when unit-length. The matrix conversions assume
/// that and do not renormalize.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Quaternion from axis-angle representation. `axis` must be unit length.
    pub fn from_axis_angle(axis: Vec3, radians: f32) -> Self {
        let (s, c) = sin_cos_approx(radians * 0.5);
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    #[inline]
    pub fn vector(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn norm_sq(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    #[inline]
    pub fn norm(&self) -> f32 { sqrt_approx(self.norm_sq()) }

    pub fn normalize(&mut self) {
        let inv = 1.0 / self.norm();
        self.x *= inv;
        self.y *= inv;
        self.z *= inv;
        self.w *= inv;
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Quaternion multiplication (Hamilton product)
    pub fn mul(&self, other: &Quat) -> Quat {
        let (a, b) = (self.vector(), other.vector());
        let v = b * self.w + a * other.w + a.cross(b);
        Quat::new(v.x, v.y, v.z, self.w * other.w - a.dot(b))
    }

    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::rotation_quaternion(self)
    }

    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::rotation_quaternion(self)
    }
}

impl AlmostEq for Quat {
    #[inline]
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.z, other.z)
            && almost_equal(self.w, other.w)
    }
}

impl Default for Quat {
    fn default() -> Self { Self::identity() }
}

impl core::fmt::Display for Quat {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {}; {})", self.x, self.y, self.z, self.w)
    }
}
