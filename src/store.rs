//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All board access from components goes through the helpers below.

use leptos::prelude::*;
use reactive_stores::Store;

use kavaar_board::{Board, BoardSession, DropOutcome, Item};

use crate::models::ColumnView;

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Board plus drag controller
    pub session: BoardSession,
    /// Live search text, exactly as typed
    pub query: String,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self {
            session: BoardSession::new(board),
            query: String::new(),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_query(store: &BoardStore) -> String {
    store.query().get()
}

pub fn store_set_query(store: &BoardStore, query: String) {
    store.query().set(query);
}

/// Filtered columns for rendering, in stage order
pub fn store_columns(store: &BoardStore) -> Vec<ColumnView> {
    let query = store.query().get();
    store.session().with(|session| ColumnView::from_view(&session.view(&query)))
}

/// Card being dragged, for the floating preview
pub fn store_dragged_item(store: &BoardStore) -> Option<Item> {
    store.session().with(|session| session.dragged_item().cloned())
}

pub fn store_drag_start(store: &BoardStore, item_id: &str) {
    store.session().update(|session| {
        session.on_drag_start(item_id);
    });
}

pub fn store_drag_over(store: &BoardStore, target_id: Option<&str>) {
    store.session().update(|session| session.on_drag_over(target_id));
}

pub fn store_drag_end(store: &BoardStore, item_id: &str, target_id: Option<&str>) -> Option<DropOutcome> {
    store.session().try_update(|session| session.on_drag_end(item_id, target_id))
}

pub fn store_drag_cancel(store: &BoardStore) {
    store.session().update(|session| session.on_drag_cancel());
}
