//! Kavaar Order Board App
//!
//! Root component: seeds the board store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::OrdersBoard;
use crate::seed;
use crate::store::BoardState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::new(seed::load_board()));
    provide_context(store);

    view! {
        <main class="app-layout">
            <OrdersBoard />
        </main>
    }
}
