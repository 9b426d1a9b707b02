//! tang-gl — approximate single-precision math for real-time graphics
//!
//! Vectors, column-major matrices, quaternions and planes over `f32`, built on
//! cheap scalar approximations: a bit-level inverse square root and a
//! parabolic sine. Good to about 1/64 absolute, which is the tolerance every
//! [`AlmostEq`] comparison uses.
//!
//! # Design principles
//! - `f32` only, fixed sizes (2/3/4 vectors, 3x3 and 4x4 matrices)
//! - `#[repr(C)]` everywhere for GPU upload; column-major matrix storage
//! - Mutators take `&mut self` and compute into a temporary before committing,
//!   so `m.multiply(&copy_of_m)` is well-defined
//! - Inversion reports singular input as [`MathError`] and never panics
//! - `no_std`, no allocation

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod scalar;
mod error;
mod vec2;
mod vec3;
mod vec4;
mod mat3;
mod mat4;
mod gauss_jordan;
mod quat;
mod plane;

pub use error::MathError;
pub use scalar::{almost_equal, cos_approx, sin_approx, sqrt_approx, AlmostEq, EPSILON};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use gauss_jordan::gauss_jordan;
pub use quat::Quat;
pub use plane::{FrustumPlane, Plane, PointClassification};

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are f32, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2);
    impl_pod!(Vec3);
    impl_pod!(Vec4);
    impl_pod!(Mat3);
    impl_pod!(Mat4);
    impl_pod!(Quat);
    impl_pod!(Plane);
}
