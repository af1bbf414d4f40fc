pub mod canvas_group;
pub mod entity;
pub mod sprite;
pub mod transform;
