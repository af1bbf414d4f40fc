/// Unique identifier for an entity in the scene.
///
/// Tweens hold this as a non-owning handle and re-resolve it every step, so a
/// despawned entity simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// Handle to a tween registered with a `TweenState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(pub u32);
