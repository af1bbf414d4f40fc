use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::canvas_group::CanvasGroup;
use crate::components::sprite::SpriteComponent;
use crate::components::transform::LocalTransform;

/// Fat Entity — a single struct with optional components.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Whether this entity is active. Deactivating does not remove it.
    pub active: bool,
    /// Position and rotation relative to `parent`.
    pub transform: LocalTransform,
    /// Parent in the scene hierarchy. `None` means the entity is a root.
    pub parent: Option<EntityId>,
    /// Sprite component (optional).
    pub sprite: Option<SpriteComponent>,
    /// Canvas group component (optional, UI entities).
    pub canvas_group: Option<CanvasGroup>,
}

impl Entity {
    /// Create a new active root entity at the origin.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            transform: LocalTransform::default(),
            parent: None,
            sprite: None,
            canvas_group: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the position relative to the parent.
    pub fn with_local_pos(mut self, pos: Vec3) -> Self {
        self.transform.position = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.transform.rotation = rotation;
        self
    }

    /// Set the parent link directly. Prefer `Scene::set_parent` once spawned,
    /// which rejects cycles.
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_canvas_group(mut self, group: CanvasGroup) -> Self {
        self.canvas_group = Some(group);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Position relative to the parent.
    pub fn local_pos(&self) -> Vec3 {
        self.transform.position
    }
}
