//! Board Session
//!
//! What the page talks to: the board plus its drag controller, with gesture
//! hooks keyed by raw droppable ids.

use tracing::{debug, warn};

use crate::board::Board;
use crate::drag::{DragController, DropOutcome, DropTarget, NoOpReason};
use crate::filter::FilterView;
use crate::item::Item;

/// One user's board for the life of the page
#[derive(Debug, Clone, Default)]
pub struct BoardSession {
    board: Board,
    drag: DragController,
}

impl BoardSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            drag: DragController::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Filtered projection for rendering
    pub fn view(&self, query: &str) -> FilterView<'_> {
        self.board.filter(query)
    }

    /// Card under the pointer while dragging
    pub fn dragged_item(&self) -> Option<&Item> {
        self.drag.active_item(&self.board)
    }

    /// Pointer picked up a card. Returns whether a drag began.
    pub fn on_drag_start(&mut self, item_id: &str) -> bool {
        match self.drag.drag_start(&self.board, item_id) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "drag start ignored");
                false
            }
        }
    }

    /// Pointer moved over a droppable (or off all of them)
    pub fn on_drag_over(&mut self, target_id: Option<&str>) {
        self.drag.drag_over(target_id.map(DropTarget::parse));
    }

    /// Pointer released. `drop_target_id` may name a stage or a card.
    pub fn on_drag_end(&mut self, dragged_id: &str, drop_target_id: Option<&str>) -> DropOutcome {
        let tracked = self.drag.active().map(|id| id.as_str() == dragged_id);
        if tracked != Some(true) {
            warn!(
                dragged = dragged_id,
                active = ?self.drag.active(),
                "drag end does not match the drag in progress"
            );
            self.drag.cancel();
            return DropOutcome::Unchanged(NoOpReason::NotDragging);
        }
        self.drag.drag_end(&mut self.board, drop_target_id.map(DropTarget::parse))
    }

    /// Gesture aborted (escape, focus loss)
    pub fn on_drag_cancel(&mut self) {
        self.drag.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSeed;
    use crate::stage::Stage;

    fn session() -> BoardSession {
        let seed = BoardSeed::new()
            .stage(Stage::New, vec![Item::new("A", "Hoodie", "HSD"), Item::new("B", "Tees", "TeeDee")])
            .stage(Stage::Done, vec![Item::new("C", "Bottle", "Atlas")]);
        BoardSession::new(Board::from_seed(seed).unwrap())
    }

    #[test]
    fn test_full_gesture() {
        let mut session = session();
        assert!(session.on_drag_start("A"));
        assert_eq!(session.dragged_item().map(|i| i.title.as_str()), Some("Hoodie"));
        session.on_drag_over(Some("done"));
        assert_eq!(session.drag().over(), Some(&DropTarget::Stage(Stage::Done)));

        let outcome = session.on_drag_end("A", Some("C"));
        assert!(outcome.is_change());
        let done: Vec<&str> = session.board().stage_ids(Stage::Done).iter().map(|id| id.as_str()).collect();
        assert_eq!(done, vec!["A", "C"]);
        assert!(session.dragged_item().is_none());
    }

    #[test]
    fn test_mismatched_end_is_noop() {
        let mut session = session();
        let before = session.board().clone();
        session.on_drag_start("A");
        let outcome = session.on_drag_end("B", Some("done"));
        assert_eq!(outcome, DropOutcome::Unchanged(NoOpReason::NotDragging));
        assert_eq!(session.board(), &before);
        assert!(!session.drag().is_dragging());
    }

    #[test]
    fn test_view_does_not_change_drop_coordinates() {
        let mut session = session();
        assert_eq!(session.view("tees").count(Stage::New), 1);

        // "B" is first in the filtered column but second on the board
        session.on_drag_start("A");
        session.on_drag_end("A", Some("B"));
        let new: Vec<&str> = session.board().stage_ids(Stage::New).iter().map(|id| id.as_str()).collect();
        assert_eq!(new, vec!["B", "A"]);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut session = session();
        let before = session.board().clone();
        session.on_drag_start("B");
        session.on_drag_cancel();
        assert!(!session.drag().is_dragging());
        assert_eq!(session.board(), &before);
        assert!(!session.on_drag_start("missing"));
    }
}
