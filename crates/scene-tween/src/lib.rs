pub mod api;
pub mod core;
pub mod components;
pub mod error;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::TweenConfig;
pub use api::types::{EntityId, TweenId};
pub use components::canvas_group::CanvasGroup;
pub use components::entity::Entity;
pub use components::sprite::SpriteComponent;
pub use components::transform::LocalTransform;
pub use crate::core::scene::Scene;
pub use crate::core::time::FixedTimestep;
pub use error::SceneError;

pub use extensions::{
    lerp, lerp_vec3, lerp_color, approx_eq_vec3, approx_eq_color,
    two_d_angle_to, two_d_rotation_to,
    TweenState, Tween, TweenTarget, TweenStatus, Space, CompletionCallback,
};
