use glam::{Quat, Vec3};

/// Transform relative to the parent entity (or the world if there is none).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Position relative to parent.
    pub position: Vec3,
    /// Rotation relative to parent.
    pub rotation: Quat,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl LocalTransform {
    /// Map a point from this transform's space into its parent's space.
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.position + self.rotation * point
    }
}
