use thiserror::Error;

use crate::api::types::EntityId;

/// Errors from structural scene edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SceneError {
    #[error("entity {0:?} is not in the scene")]
    UnknownEntity(EntityId),
    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    ParentCycle { child: EntityId, parent: EntityId },
}
