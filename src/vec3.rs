//! 3D vector algebra.
//!
//! Points, directions and RGB colors all share one SIMD-friendly value type,
//! `glam::Vec3A`. The aliases below only document intent at call sites.

use glam::Vec3A;

/// Direction or displacement in 3D space.
pub type Vec3 = Vec3A;

/// Position in world space.
pub type Point3 = Vec3A;

/// Linear RGB color, nominally with components in [0, 1].
pub type Color = Vec3A;

/// Build a vector from up to three components.
///
/// Missing trailing components default to `0.0`, so `vec3_from(&[1.0])` is
/// `(1, 0, 0)` and `vec3_from(&[])` is the zero vector. Extra components are
/// ignored.
pub fn vec3_from(components: &[f32]) -> Vec3 {
    let mut xyz = [0.0; 3];
    for (slot, value) in xyz.iter_mut().zip(components) {
        *slot = *value;
    }
    Vec3::from_array(xyz)
}

/// Sum of component-wise products.
#[inline]
pub fn dot(u: Vec3, v: Vec3) -> f32 {
    u.dot(v)
}

/// Scale `v` to unit length.
///
/// Computed as `v / v.length()` with no guard: a zero vector produces
/// non-finite components.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v / v.length()
}
