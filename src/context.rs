//! Board Context
//!
//! Shared handles provided via Leptos Context API to the board's columns
//! and cards.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::store::BoardStore;

/// Board-wide handles provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// Page state
    pub store: BoardStore,
    /// Pointer gesture signals shared by every draggable card
    pub dnd: DndSignals,
}

impl BoardContext {
    pub fn new(store: BoardStore, dnd: DndSignals) -> Self {
        Self { store, dnd }
    }
}

/// Get the board context, provided by `OrdersBoard`
pub fn use_board_context() -> BoardContext {
    expect_context::<BoardContext>()
}
