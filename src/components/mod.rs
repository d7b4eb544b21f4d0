//! UI Components
//!
//! Leptos components for the order board page.

mod card_ghost;
mod order_card;
mod orders_board;
mod search_box;
mod stage_column;

pub use card_ghost::CardGhost;
pub use order_card::{CardSummary, OrderCard};
pub use orders_board::OrdersBoard;
pub use search_box::SearchBox;
pub use stage_column::StageColumn;
