//! Kavaar Order Board
//!
//! In-memory model behind the orders Kanban page.
//!
//! - `stage`: fixed, ordered catalogue of workflow columns
//! - `item`: order/request cards and their search text
//! - `board`: stage -> ordered cards, the only source of truth
//! - `index`: item id -> (stage, position) lookup
//! - `filter`: read-only, query-filtered projection for display
//! - `drag`: gesture state machine that turns a drop into one board move
//!
//! The board is single-session and single-writer: only the drag controller
//! relocates cards, and every relocation is all-or-nothing.

mod board;
mod drag;
mod error;
mod filter;
mod index;
mod item;
mod session;
mod stage;

pub use board::{Board, BoardSeed, Move};
pub use drag::{DragController, DragState, DropOutcome, DropTarget, NoOpReason};
pub use error::{BoardError, DragError, Result};
pub use filter::FilterView;
pub use index::{Index, Location};
pub use item::{Item, ItemId, Tag, Tone};
pub use session::BoardSession;
pub use stage::Stage;
