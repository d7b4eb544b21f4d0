//! Search Box Component

use leptos::prelude::*;

use crate::store::{store_query, store_set_query, use_board_store};

/// Live filter input; every keystroke narrows the columns
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_board_store();

    view! {
        <input
            type="search"
            class="board-search"
            placeholder="Search orders…"
            prop:value=move || store_query(&store)
            on:input=move |ev| store_set_query(&store, event_target_value(&ev))
        />
    }
}
