//! Seed Board
//!
//! Mock orders the page starts from. There is no backend; this document is
//! the whole data set for the session.

use kavaar_board::Board;

const BOARD_JSON: &str = include_str!("seed/board.json");

/// Parse the embedded seed. A bad seed is logged and the page starts empty.
pub fn load_board() -> Board {
    match Board::from_json(BOARD_JSON) {
        Ok(board) => {
            tracing::info!(cards = board.len(), "seed board loaded");
            board
        }
        Err(err) => {
            tracing::error!(%err, "seed board rejected, starting empty");
            Board::new()
        }
    }
}
