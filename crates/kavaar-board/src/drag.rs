//! Drag Interaction Controller
//!
//! Idle -> Dragging on drag-start, back to Idle on drag-end whatever the
//! outcome. Hovering only records a preview target. The board is mutated
//! at most once per gesture, on drag-end, and only through positions taken
//! from the board's own index.

use tracing::{debug, warn};

use crate::board::{Board, Move};
use crate::error::{BoardError, DragError};
use crate::item::{Item, ItemId};
use crate::stage::Stage;

/// What the pointer was released over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// A column itself (header or empty body): append to it
    Stage(Stage),
    /// Another card: take its slot
    Item(ItemId),
}

impl DropTarget {
    /// Classify a raw droppable id. Stage ids win; everything else is a card.
    pub fn parse(raw: &str) -> Self {
        match Stage::from_id(raw) {
            Some(stage) => DropTarget::Stage(stage),
            None => DropTarget::Item(ItemId::from(raw)),
        }
    }
}

/// Controller state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        active: ItemId,
        over: Option<DropTarget>,
    },
}

/// Why a drop left the board alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoOpReason {
    /// Drag-end without a drag in progress
    NotDragging,
    /// Released outside any target, or cancelled
    NoTarget,
    /// Dragged or target id not on the board
    Unresolved(ItemId),
    /// Card would land where it already is
    SamePosition,
    /// Board refused the move
    Rejected(BoardError),
}

/// Result of a completed gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Card moved inside its own stage
    Reordered(Move),
    /// Card moved to another stage
    Moved(Move),
    Unchanged(NoOpReason),
}

impl DropOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, DropOutcome::Unchanged(_))
    }

    fn from_move(result: Result<Move, BoardError>) -> Self {
        match result {
            Ok(mv) if mv.is_noop() => DropOutcome::Unchanged(NoOpReason::SamePosition),
            Ok(mv) if mv.from.stage == mv.to.stage => DropOutcome::Reordered(mv),
            Ok(mv) => DropOutcome::Moved(mv),
            Err(err) => DropOutcome::Unchanged(NoOpReason::Rejected(err)),
        }
    }
}

/// Drag gesture state machine
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Id of the card being dragged
    pub fn active(&self) -> Option<&ItemId> {
        match &self.state {
            DragState::Dragging { active, .. } => Some(active),
            DragState::Idle => None,
        }
    }

    /// Target currently hovered, for insertion previews
    pub fn over(&self) -> Option<&DropTarget> {
        match &self.state {
            DragState::Dragging { over, .. } => over.as_ref(),
            DragState::Idle => None,
        }
    }

    /// The dragged card, for the floating preview
    pub fn active_item<'b>(&self, board: &'b Board) -> Option<&'b Item> {
        self.active().and_then(|id| board.get(id.as_str()))
    }

    /// Begin dragging `id`. A second start while dragging is refused and the
    /// first drag carries on.
    pub fn drag_start(&mut self, board: &Board, id: &str) -> Result<(), DragError> {
        if let DragState::Dragging { active, .. } = &self.state {
            warn!(active = %active, requested = id, "drag start while already dragging");
            return Err(DragError::AlreadyDragging {
                active: active.clone(),
            });
        }
        if !board.index().contains(id) {
            return Err(DragError::UnknownItem { id: ItemId::from(id) });
        }
        debug!(item = id, "drag start");
        self.state = DragState::Dragging {
            active: ItemId::from(id),
            over: None,
        };
        Ok(())
    }

    /// Record the hovered target. Never touches the board.
    pub fn drag_over(&mut self, target: Option<DropTarget>) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = target;
        }
    }

    /// Finish the gesture and apply at most one move
    pub fn drag_end(&mut self, board: &mut Board, target: Option<DropTarget>) -> DropOutcome {
        let DragState::Dragging { active, .. } = std::mem::take(&mut self.state) else {
            return DropOutcome::Unchanged(NoOpReason::NotDragging);
        };
        let outcome = match target {
            None => DropOutcome::Unchanged(NoOpReason::NoTarget),
            Some(target) => resolve_drop(board, &active, target),
        };
        match &outcome {
            DropOutcome::Unchanged(reason) => debug!(item = %active, ?reason, "drop left board unchanged"),
            DropOutcome::Reordered(mv) | DropOutcome::Moved(mv) => {
                debug!(item = %active, from = ?mv.from, to = ?mv.to, "drop applied")
            }
        }
        outcome
    }

    /// Abort the gesture; same as releasing over nothing
    pub fn cancel(&mut self) {
        if let DragState::Dragging { active, .. } = std::mem::take(&mut self.state) {
            debug!(item = %active, "drag cancelled");
        }
    }
}

/// Turn a drop into one board mutation, using current index positions
fn resolve_drop(board: &mut Board, active: &ItemId, target: DropTarget) -> DropOutcome {
    let Some(from) = board.locate(active.as_str()) else {
        return DropOutcome::Unchanged(NoOpReason::Unresolved(active.clone()));
    };
    match target {
        DropTarget::Stage(stage) => {
            DropOutcome::from_move(board.move_to_end_of_stage(active.as_str(), from.stage, stage))
        }
        DropTarget::Item(over_id) => {
            let Some(to) = board.locate(over_id.as_str()) else {
                return DropOutcome::Unchanged(NoOpReason::Unresolved(over_id));
            };
            if from.stage == to.stage {
                DropOutcome::from_move(board.move_within_stage(from.stage, from.position, to.position))
            } else {
                DropOutcome::from_move(board.move_across_stages(
                    active.as_str(),
                    from.stage,
                    to.stage,
                    to.position,
                ))
            }
        }
    }
}
