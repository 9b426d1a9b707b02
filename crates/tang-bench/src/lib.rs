//! Shared helpers for tang-gl benchmarks: seeded RNG, input generators.

use tang_gl::{Mat3, Mat4, Quat, Vec3};

/// Simple xoshiro256** PRNG for reproducible benchmarks (no rand dependency in lib).
pub struct Rng {
    s: [u64; 4],
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        // SplitMix64 to expand seed into state
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            *slot = z ^ (z >> 31);
        }
        Self { s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }

    /// Uniform f32 in [-1, 1]
    pub fn f32(&mut self) -> f32 {
        ((self.next_u64() as f64) / (u64::MAX as f64) * 2.0 - 1.0) as f32
    }

    /// Uniform f32 in [lo, hi]
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (self.f32() * 0.5 + 0.5) * (hi - lo)
    }
}

pub fn make_rng() -> Rng {
    Rng::new(0xDEAD_BEEF_CAFE_BABE)
}

// --- scalar inputs ---

/// Positive inputs for the square-root benches, spread over several decades.
pub fn random_positive_f32s(n: usize) -> Vec<f32> {
    let mut rng = make_rng();
    (0..n).map(|_| 10f32.powf(rng.range(-3.0, 6.0))).collect()
}

/// Angles in radians over a few full turns, both signs.
pub fn random_angles(n: usize) -> Vec<f32> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| rng.f32() * 4.0 * std::f32::consts::PI)
        .collect()
}

// --- tang-gl generators ---

pub fn random_vec3(n: usize) -> Vec<Vec3> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| Vec3::new(rng.f32(), rng.f32(), rng.f32()))
        .collect()
}

/// Uniform entries with the diagonal pushed out so the matrix stays invertible.
pub fn random_mat3(n: usize) -> Vec<Mat3> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = Mat3::from_cols_array(std::array::from_fn(|_| rng.f32()));
            for i in 0..3 {
                m.set(i, i, m.get(i, i) + 4.0);
            }
            m
        })
        .collect()
}

/// Uniform entries with the diagonal pushed out so the matrix stays invertible.
pub fn random_mat4(n: usize) -> Vec<Mat4> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let mut m = Mat4::from_cols_array(std::array::from_fn(|_| rng.f32()));
            for i in 0..4 {
                m.set(i, i, m.get(i, i) + 5.0);
            }
            m
        })
        .collect()
}

/// Rigid transforms: rotation from a random unit quaternion plus a translation.
pub fn random_rigid_mat4(n: usize) -> Vec<Mat4> {
    let mut rng = make_rng();
    (0..n)
        .map(|_| {
            let q = Quat::new(rng.f32(), rng.f32(), rng.f32(), rng.f32() + 2.0).normalized();
            let t = Vec3::new(rng.f32(), rng.f32(), rng.f32()) * 10.0;
            Mat4::from_rotation_translation(q.to_mat3(), t)
        })
        .collect()
}

/// Same data as a glam matrix, for side-by-side benches.
pub fn to_glam(m: &Mat4) -> glam::Mat4 {
    glam::Mat4::from_cols_array(m.as_array())
}
