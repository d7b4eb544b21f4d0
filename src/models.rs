//! Frontend Models
//!
//! Owned snapshots of the filtered board, cheap to diff in memos.

use kavaar_board::{FilterView, Item, Stage};

/// One rendered column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnView {
    pub stage: Stage,
    /// Matching cards in board order
    pub cards: Vec<Item>,
}

impl ColumnView {
    pub fn from_view(view: &FilterView<'_>) -> Vec<ColumnView> {
        view.columns()
            .map(|(stage, items)| ColumnView {
                stage,
                cards: items.iter().map(|item| (*item).clone()).collect(),
            })
            .collect()
    }
}

/// Cards of `stage` from a column snapshot
pub fn cards_for(columns: &[ColumnView], stage: Stage) -> Vec<Item> {
    columns
        .iter()
        .find(|column| column.stage == stage)
        .map(|column| column.cards.clone())
        .unwrap_or_default()
}
