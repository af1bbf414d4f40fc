// extensions/rotation.rs
//
// Planar look-at rotation. Pure functions.

use glam::{Quat, Vec3};

/// Signed planar angle, in degrees, of the direction from `to` back toward
/// `start`, plus `offset`. Coincident points give `offset`.
pub fn two_d_angle_to(start: Vec3, to: Vec3, offset: f32) -> f32 {
    let dir = (start - to).normalize_or_zero();
    dir.y.atan2(dir.x).to_degrees() + offset
}

/// Rotation about the depth (Z) axis only, by `two_d_angle_to` degrees.
pub fn two_d_rotation_to(start: Vec3, to: Vec3, offset: f32) -> Quat {
    Quat::from_rotation_z(two_d_angle_to(start, to, offset).to_radians())
}
