//! Orders Board Component
//!
//! Page body: header with search, one column per stage, drag preview.
//! Owns the gesture signals and forwards them to the board store.

use leptos::prelude::*;
use leptos_dragdrop::*;

use kavaar_board::Stage;

use crate::components::{CardGhost, SearchBox, StageColumn};
use crate::context::BoardContext;
use crate::navigation::NEW_ORDER_HREF;
use crate::store::{
    store_columns, store_drag_cancel, store_drag_end, store_drag_over, store_drag_start, use_board_store,
};

#[component]
pub fn OrdersBoard() -> impl IntoView {
    let store = use_board_store();
    let dnd = create_dnd_signals(DndConfig::default());
    provide_context(BoardContext::new(store, dnd));

    bind_global_mouseup(
        dnd,
        move |dragged| store_drag_start(&store, &dragged),
        move |dragged, target| {
            let target_id = target.as_ref().map(DropTarget::id);
            if let Some(outcome) = store_drag_end(&store, &dragged, target_id) {
                tracing::debug!(item = %dragged, ?outcome, "drop handled");
            }
        },
        move |dragged| {
            tracing::debug!(item = %dragged, "drag cancelled");
            store_drag_cancel(&store);
        },
    );

    // Hover changes feed the controller's drop target
    Effect::new(move |_| {
        let target = dnd.drop_target_read.get();
        if dnd.dragging_id_read.get_untracked().is_some() {
            store_drag_over(&store, target.as_ref().map(DropTarget::id));
        }
    });

    let columns = Memo::new(move |_| store_columns(&store));

    view! {
        <div class="board-page">
            <header class="board-header">
                <div class="board-heading">
                    <h1>"Orders · Kanban"</h1>
                    <p class="board-subtitle">"Drag cards to update stage. Click a card to open details."</p>
                </div>
                <div class="board-tools">
                    <SearchBox />
                    <a class="new-order-btn" href=NEW_ORDER_HREF>"New order"</a>
                </div>
            </header>

            <div class="board-columns">
                {Stage::ALL
                    .into_iter()
                    .map(|stage| view! { <StageColumn stage=stage columns=columns /> })
                    .collect_view()}
            </div>

            <CardGhost />

            <footer class="board-footer">"Prototype board • Maker mode"</footer>
        </div>
    }
}
