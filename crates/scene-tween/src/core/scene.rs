use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::error::SceneError;

/// Simple entity storage using a flat Vec.
/// Designed for small-to-medium entity counts (hundreds, not millions).
///
/// The hierarchy lives in `Entity::parent`; world-space values are resolved
/// on demand by walking up the parent chain.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(256),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Remove a single entity by ID. Children keep a dangling parent link
    /// and resolve as roots afterwards. Returns the removed entity if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        if let Some(idx) = self.entities.iter().position(|e| e.id == id) {
            Some(self.entities.swap_remove(idx))
        } else {
            None
        }
    }

    /// Remove an entity together with all of its descendants.
    /// Returns the number of entities removed (0 if `id` was not present).
    pub fn destroy(&mut self, id: EntityId) -> usize {
        if !self.contains(id) {
            return 0;
        }

        let mut doomed = vec![id];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor];
            for e in &self.entities {
                if e.parent == Some(current) && !doomed.contains(&e.id) {
                    doomed.push(e.id);
                }
            }
            cursor += 1;
        }

        let before = self.entities.len();
        self.entities.retain(|e| !doomed.contains(&e.id));
        before - self.entities.len()
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Whether an entity with this ID is still in the scene.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|e| e.id == id)
    }

    /// Iterate over all entities.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Direct children of an entity.
    pub fn children(&self, id: EntityId) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|e| e.parent == Some(id))
            .map(|e| e.id)
            .collect()
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    /// The child's local transform is kept as-is.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) -> Result<(), SceneError> {
        if !self.contains(child) {
            return Err(SceneError::UnknownEntity(child));
        }

        if let Some(p) = parent {
            if !self.contains(p) {
                return Err(SceneError::UnknownEntity(p));
            }
            if p == child || self.is_ancestor(child, p) {
                log::warn!("rejected parent {:?} for {:?}: cycle", p, child);
                return Err(SceneError::ParentCycle { child, parent: p });
            }
        }

        if let Some(entity) = self.get_mut(child) {
            entity.parent = parent;
        }
        Ok(())
    }

    /// Whether `ancestor` appears in the parent chain of `id`.
    pub fn is_ancestor(&self, ancestor: EntityId, id: EntityId) -> bool {
        self.ancestors(id).any(|e| e.id == ancestor)
    }

    /// World-space position and rotation, composed from every ancestor.
    pub fn world_transform(&self, id: EntityId) -> Option<(Vec3, Quat)> {
        let entity = self.get(id)?;
        let mut pos = entity.transform.position;
        let mut rot = entity.transform.rotation;
        for ancestor in self.ancestors(id) {
            pos = ancestor.transform.transform_point(pos);
            rot = ancestor.transform.rotation * rot;
        }
        Some((pos, rot))
    }

    /// World-space position of an entity.
    pub fn world_position(&self, id: EntityId) -> Option<Vec3> {
        self.world_transform(id).map(|(pos, _)| pos)
    }

    /// Move an entity so that its world-space position becomes `pos`.
    /// Returns false if the entity is not in the scene.
    pub fn set_world_position(&mut self, id: EntityId, pos: Vec3) -> bool {
        let Some(entity) = self.get(id) else { return false };

        let local = match entity.parent.and_then(|p| self.world_transform(p)) {
            Some((parent_pos, parent_rot)) => parent_rot.inverse() * (pos - parent_pos),
            None => pos,
        };

        match self.get_mut(id) {
            Some(entity) => {
                entity.transform.position = local;
                true
            }
            None => false,
        }
    }

    /// True if the entity and every ancestor are active.
    pub fn is_active_in_hierarchy(&self, id: EntityId) -> bool {
        match self.get(id) {
            Some(entity) => entity.active && self.ancestors(id).all(|a| a.active),
            None => false,
        }
    }

    /// Opacity after multiplying every canvas group from the entity up to the root.
    pub fn effective_alpha(&self, id: EntityId) -> Option<f32> {
        let entity = self.get(id)?;
        let own = entity.canvas_group.map_or(1.0, |g| g.alpha);
        Some(
            self.ancestors(id)
                .filter_map(|a| a.canvas_group)
                .fold(own, |acc, g| acc * g.alpha),
        )
    }

    /// Walk the parent chain, nearest first. A dangling parent link ends the walk,
    /// and the walk never visits more entities than the scene holds.
    fn ancestors(&self, id: EntityId) -> impl Iterator<Item = &Entity> + '_ {
        let mut next = self.get(id).and_then(|e| e.parent);
        let mut remaining = self.entities.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let parent = self.get(next?)?;
            next = parent.parent;
            Some(parent)
        })
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
