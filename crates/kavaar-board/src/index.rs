//! Index Resolver
//!
//! Maps every item id on the board to its current (stage, position).
//! The board keeps one up to date inside each mutation; `Index::build`
//! recomputes it from scratch for verification.

use std::collections::HashMap;

use crate::board::Board;
use crate::item::ItemId;
use crate::stage::Stage;

/// Where an item currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub stage: Stage,
    pub position: usize,
}

impl Location {
    pub fn new(stage: Stage, position: usize) -> Self {
        Self { stage, position }
    }
}

/// Item id -> location lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    locations: HashMap<ItemId, Location>,
}

impl Index {
    /// Full rebuild, O(total items)
    pub fn build(board: &Board) -> Self {
        let mut index = Index::default();
        for stage in Stage::ALL {
            index.renumber(stage, board.stage_ids(stage), 0);
        }
        index
    }

    pub fn get(&self, id: &str) -> Option<Location> {
        self.locations.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Rewrite locations for `ids[from..]` of one stage
    pub(crate) fn renumber(&mut self, stage: Stage, ids: &[ItemId], from: usize) {
        for (position, id) in ids.iter().enumerate().skip(from) {
            self.locations.insert(id.clone(), Location::new(stage, position));
        }
    }

    pub(crate) fn insert(&mut self, id: ItemId, location: Location) {
        self.locations.insert(id, location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_build_covers_every_item() {
        let mut board = Board::new();
        board.push(Stage::New, Item::new("A", "a", "x")).unwrap();
        board.push(Stage::New, Item::new("B", "b", "x")).unwrap();
        board.push(Stage::Done, Item::new("C", "c", "y")).unwrap();

        let index = Index::build(&board);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get("A"), Some(Location::new(Stage::New, 0)));
        assert_eq!(index.get("B"), Some(Location::new(Stage::New, 1)));
        assert_eq!(index.get("C"), Some(Location::new(Stage::Done, 0)));
        assert_eq!(index.get("Z"), None);
    }

    #[test]
    fn test_empty_board() {
        let index = Index::build(&Board::new());
        assert!(index.is_empty());
        assert!(!index.contains("A"));
    }
}
