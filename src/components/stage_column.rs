//! Stage Column Component
//!
//! A single stage: header with the filtered count, then its cards.
//! The column body is a drop target for appending to the stage.

use leptos::prelude::*;
use leptos_dragdrop::*;

use kavaar_board::Stage;

use crate::components::OrderCard;
use crate::context::use_board_context;
use crate::models::{cards_for, ColumnView};

fn column_class(is_over: bool) -> &'static str {
    if is_over {
        "stage-column drop-target"
    } else {
        "stage-column"
    }
}

#[component]
pub fn StageColumn(stage: Stage, columns: Memo<Vec<ColumnView>>) -> impl IntoView {
    let ctx = use_board_context();
    let dnd = ctx.dnd;
    let column_id = stage.as_str().to_string();

    let cards = move || cards_for(&columns.get(), stage);
    let count = move || cards().len();

    let on_mouseenter = make_on_column_mouseenter(dnd, column_id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let is_over = {
        let column_id = column_id.clone();
        move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Column(id)) if id == column_id)
    };

    view! {
        <section
            class=move || column_class(is_over())
            data-stage=stage.as_str()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <header class="stage-header">
                <span class="stage-label">{stage.label()}</span>
                <span class="stage-count">{count}</span>
            </header>
            <div class="stage-cards">
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! { <p class="stage-empty">"No items"</p> }
                >
                    <For
                        each=cards
                        key=|item| item.id.clone()
                        children=move |item| {
                            view! { <OrderCard item=item stage=stage /> }
                        }
                    />
                </Show>
            </div>
        </section>
    }
}
