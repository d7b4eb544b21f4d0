//! Filter View
//!
//! Read-only projection of the board for display. Positions in a filtered
//! column are display positions only; drag resolution always goes through
//! the board's own index.

use crate::board::Board;
use crate::item::Item;
use crate::stage::Stage;

/// Cards of each stage that match a search query, in board order
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    columns: [Vec<&'a Item>; Stage::COUNT],
    identity: bool,
}

impl<'a> FilterView<'a> {
    /// Blank or whitespace-only queries keep every card. Anything else is
    /// lowercased as typed and matched against `Item::search_text`.
    pub fn new(board: &'a Board, query: &str) -> Self {
        let identity = query.trim().is_empty();
        let needle = query.to_lowercase();
        let columns = Stage::ALL.map(|stage| {
            board
                .stage(stage)
                .filter(|item| identity || item.matches(&needle))
                .collect()
        });
        Self { columns, identity }
    }

    /// Matching cards of one stage
    pub fn stage(&self, stage: Stage) -> &[&'a Item] {
        &self.columns[stage.ordinal()]
    }

    /// Header count for a column
    pub fn count(&self, stage: Stage) -> usize {
        self.stage(stage).len()
    }

    pub fn columns(&self) -> impl Iterator<Item = (Stage, &[&'a Item])> + '_ {
        Stage::ALL.into_iter().map(move |stage| (stage, self.stage(stage)))
    }

    /// Matching cards across all stages
    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    /// The query did not filter anything out by construction
    pub fn is_identity(&self) -> bool {
        self.identity
    }
}

impl Board {
    /// Project the board through a search query
    pub fn filter(&self, query: &str) -> FilterView<'_> {
        FilterView::new(self, query)
    }
}
