//! Card Ghost Component
//!
//! Floating copy of the dragged card that follows the pointer.

use leptos::prelude::*;

use crate::components::CardSummary;
use crate::context::use_board_context;
use crate::store::store_dragged_item;

const GHOST_OFFSET_PX: i32 = 12;

#[component]
pub fn CardGhost() -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;
    let dnd = ctx.dnd;

    let style = move || {
        let (x, y) = dnd.pointer_read.get();
        format!("left: {}px; top: {}px;", x + GHOST_OFFSET_PX, y + GHOST_OFFSET_PX)
    };

    move || {
        store_dragged_item(&store).map(|item| {
            view! {
                <div class="card-ghost" style=style>
                    <CardSummary item=item />
                </div>
            }
        })
    }
}
