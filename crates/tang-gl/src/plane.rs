use crate::scalar::{almost_equal, AlmostEq};
use crate::Vec3;

/// Plane `a*x + b*y + c*z + d = 0`.
///
/// `(a, b, c)` is the normal. Distances are only metric when it is unit length.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

/// Which side of a plane a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointClassification {
    InFront,
    Behind,
    OnPlane,
}

/// The six planes of a view frustum, in the order they are usually stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrustumPlane {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Bottom,
        FrustumPlane::Top,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];

    /// Slot in a `[Plane; 6]`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Plane {
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { a, b, c, d }
    }

    /// Plane through `point` with the given `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self::new(normal.x, normal.y, normal.z, -normal.dot(point))
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::new(self.a, self.b, self.c)
    }

    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.a * p.x + self.b * p.y + self.c * p.z + self.d
    }

    /// Points within `EPSILON` of the plane count as on it.
    pub fn classify(&self, p: Vec3) -> PointClassification {
        let dist = self.signed_distance(p);
        if almost_equal(dist, 0.0) {
            PointClassification::OnPlane
        } else if dist > 0.0 {
            PointClassification::InFront
        } else {
            PointClassification::Behind
        }
    }
}

impl AlmostEq for Plane {
    fn almost_eq(&self, other: &Self) -> bool {
        almost_equal(self.a, other.a)
            && almost_equal(self.b, other.b)
            && almost_equal(self.c, other.c)
            && almost_equal(self.d, other.d)
    }
}

impl core::fmt::Display for Plane {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}x + {}y + {}z + {} = 0", self.a, self.b, self.c, self.d)
    }
}
