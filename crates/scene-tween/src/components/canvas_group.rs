/// UI container whose opacity multiplies into every child UI element.
/// See `Scene::effective_alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGroup {
    pub alpha: f32,
}

impl Default for CanvasGroup {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl CanvasGroup {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}
