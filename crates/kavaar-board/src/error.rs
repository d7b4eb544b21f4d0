//! Board and drag errors
//!
//! None of these reach the user: the drag controller turns them into
//! no-op drops. Seed loading is the only caller-visible failure.

use thiserror::Error;

use crate::item::ItemId;
use crate::stage::Stage;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised by board construction and mutation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Item id collides with a stage id, so a drop on it would be ambiguous
    #[error("item id {id} is reserved for stage {stage}")]
    ReservedItemId { id: ItemId, stage: Stage },

    /// Item id is not on the board
    #[error("item not found: {id}")]
    UnknownItem { id: ItemId },

    /// Item id appears more than once in a seed
    #[error("duplicate item id {id} (in {first} and {second})")]
    DuplicateItem {
        id: ItemId,
        first: Stage,
        second: Stage,
    },

    /// Item exists but not in the stage the caller expected
    #[error("item {id} is not in stage {stage}")]
    ItemNotInStage { id: ItemId, stage: Stage },

    /// Position outside 0..len of a stage
    #[error("position {position} out of range for stage {stage} (len {len})")]
    PositionOutOfRange {
        stage: Stage,
        position: usize,
        len: usize,
    },

    /// Seed document could not be parsed
    #[error("invalid board seed: {message}")]
    Seed { message: String },
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::Seed {
            message: err.to_string(),
        }
    }
}

/// Errors raised by the drag controller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DragError {
    /// A drag is already in progress
    #[error("drag already in progress for {active}")]
    AlreadyDragging { active: ItemId },

    /// Drag started on an id that is not on the board
    #[error("cannot drag unknown item {id}")]
    UnknownItem { id: ItemId },
}
