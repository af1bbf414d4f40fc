use glam::Vec4;

/// Sprite component — the visible color of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    /// RGBA tint. `w` is alpha (0.0 = invisible, 1.0 = opaque).
    pub color: Vec4,
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}

impl SpriteComponent {
    pub fn new(color: Vec4) -> Self {
        Self { color }
    }

    pub fn alpha(&self) -> f32 {
        self.color.w
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.w = alpha;
        self
    }
}
