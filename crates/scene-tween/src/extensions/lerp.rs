// extensions/lerp.rs
//
// Clamped interpolation and approximate equality.
// No dependencies on Entity/Scene — just math.

use glam::{Vec3, Vec4};

/// Linearly interpolate between two values. `t` is clamped to [0, 1].
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Linearly interpolate between two Vec3 values. `t` is clamped to [0, 1].
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Linearly interpolate between two RGBA colors. `t` is clamped to [0, 1].
#[inline]
pub fn lerp_color(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Vectors count as equal once their squared distance is below `epsilon²`.
/// Exact float equality is never reached by a fractional lerp in general.
#[inline]
pub fn approx_eq_vec3(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    a.distance_squared(b) < epsilon * epsilon
}

/// RGBA counterpart of `approx_eq_vec3`.
#[inline]
pub fn approx_eq_color(a: Vec4, b: Vec4, epsilon: f32) -> bool {
    a.distance_squared(b) < epsilon * epsilon
}
