// extensions/mod.rs
//
// Interpolation, rotation and tween systems.
// These read and write the Scene through EntityId handles only.

pub mod lerp;
pub mod rotation;
pub mod tween;

pub use lerp::{lerp, lerp_vec3, lerp_color, approx_eq_vec3, approx_eq_color};
pub use rotation::{two_d_angle_to, two_d_rotation_to};
pub use tween::{TweenState, Tween, TweenTarget, TweenStatus, Space, CompletionCallback};
