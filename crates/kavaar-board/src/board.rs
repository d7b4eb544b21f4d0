//! Board Model
//!
//! Owns the stage -> ordered cards mapping. Cards live in an arena keyed by
//! id; each stage holds an ordered list of ids. The id -> location index is
//! patched inside every mutation, touching only the positions that shifted.
//!
//! Every mutation validates first and mutates second, so a rejected call
//! leaves the board exactly as it was.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoardError, Result};
use crate::index::{Index, Location};
use crate::item::{Item, ItemId};
use crate::stage::Stage;

/// Initial board contents, stage id -> cards in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardSeed {
    pub stages: BTreeMap<Stage, Vec<Item>>,
}

impl BoardSeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: set the cards of one stage
    pub fn stage(mut self, stage: Stage, items: Vec<Item>) -> Self {
        self.stages.insert(stage, items);
        self
    }
}

/// A relocation that was applied to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub id: ItemId,
    pub from: Location,
    pub to: Location,
}

impl Move {
    /// The card ended where it started
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Stage -> ordered cards
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    items: HashMap<ItemId, Item>,
    columns: [Vec<ItemId>; Stage::COUNT],
    index: Index,
}

impl Board {
    /// Every stage present and empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from seed data. Stages absent from the seed start empty.
    pub fn from_seed(seed: BoardSeed) -> Result<Self> {
        let mut board = Board::new();
        for (stage, items) in seed.stages {
            for item in items {
                board.push(stage, item)?;
            }
        }
        debug!(items = board.len(), "board seeded");
        Ok(board)
    }

    /// Parse a JSON seed document (`{"new": [...], "quotes": [...]}`)
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: BoardSeed = serde_json::from_str(json)?;
        Self::from_seed(seed)
    }

    /// Snapshot the board back into seed form
    pub fn to_seed(&self) -> BoardSeed {
        let stages = Stage::ALL
            .into_iter()
            .map(|stage| (stage, self.stage(stage).cloned().collect()))
            .collect();
        BoardSeed { stages }
    }

    /// Append a card during initial population
    pub(crate) fn push(&mut self, stage: Stage, item: Item) -> Result<()> {
        if let Some(reserved) = Stage::from_id(item.id.as_str()) {
            return Err(BoardError::ReservedItemId {
                id: item.id,
                stage: reserved,
            });
        }
        if let Some(existing) = self.index.get(item.id.as_str()) {
            return Err(BoardError::DuplicateItem {
                id: item.id,
                first: existing.stage,
                second: stage,
            });
        }
        let column = &mut self.columns[stage.ordinal()];
        let location = Location::new(stage, column.len());
        column.push(item.id.clone());
        self.index.insert(item.id.clone(), location);
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    // ========================
    // Reads
    // ========================

    /// Card ids of a stage in display order
    pub fn stage_ids(&self, stage: Stage) -> &[ItemId] {
        &self.columns[stage.ordinal()]
    }

    /// Cards of a stage in display order
    pub fn stage(&self, stage: Stage) -> impl Iterator<Item = &Item> + '_ {
        self.stage_ids(stage)
            .iter()
            .filter_map(move |id| self.items.get(id))
    }

    pub fn stage_len(&self, stage: Stage) -> usize {
        self.stage_ids(stage).len()
    }

    /// All stages with their cards, in display order
    pub fn columns(&self) -> impl Iterator<Item = (Stage, Vec<&Item>)> + '_ {
        Stage::ALL
            .into_iter()
            .map(move |stage| (stage, self.stage(stage).collect()))
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Current (stage, position) of a card
    pub fn locate(&self, id: &str) -> Option<Location> {
        self.index.get(id)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Total cards across all stages
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================
    // Mutations
    // ========================

    /// Move the card at `from` to `to` inside one stage; cards in between
    /// shift by one. Both positions must be valid indices.
    pub fn move_within_stage(&mut self, stage: Stage, from: usize, to: usize) -> Result<Move> {
        let len = self.stage_len(stage);
        for position in [from, to] {
            if position >= len {
                return Err(BoardError::PositionOutOfRange {
                    stage,
                    position,
                    len,
                });
            }
        }

        let column = &mut self.columns[stage.ordinal()];
        let id = column[from].clone();
        if from != to {
            let moved = column.remove(from);
            column.insert(to, moved);
            let (low, high) = (from.min(to), from.max(to));
            self.index.renumber(stage, &column[..=high], low);
            debug!(item = %id, %stage, from, to, "reordered within stage");
        }

        Ok(Move {
            id,
            from: Location::new(stage, from),
            to: Location::new(stage, to),
        })
    }

    /// Take `id` out of `from_stage` and insert it at `to_position` in
    /// `to_stage`. The position is clamped to the destination length measured
    /// after removal, so `len` appends.
    pub fn move_across_stages(
        &mut self,
        id: &str,
        from_stage: Stage,
        to_stage: Stage,
        to_position: usize,
    ) -> Result<Move> {
        let origin = self.index.get(id).ok_or_else(|| BoardError::UnknownItem {
            id: ItemId::from(id),
        })?;
        if origin.stage != from_stage {
            return Err(BoardError::ItemNotInStage {
                id: ItemId::from(id),
                stage: from_stage,
            });
        }

        let source = &mut self.columns[from_stage.ordinal()];
        let moved = source.remove(origin.position);
        self.index.renumber(from_stage, source, origin.position);

        let dest = &mut self.columns[to_stage.ordinal()];
        let position = to_position.min(dest.len());
        dest.insert(position, moved.clone());
        self.index.renumber(to_stage, dest, position);

        let target = Location::new(to_stage, position);
        debug!(
            item = %moved,
            from = %from_stage,
            from_position = origin.position,
            to = %to_stage,
            to_position = position,
            "moved across stages"
        );

        Ok(Move {
            id: moved,
            from: origin,
            to: target,
        })
    }

    /// Append `id` to the end of `to_stage`
    pub fn move_to_end_of_stage(&mut self, id: &str, from_stage: Stage, to_stage: Stage) -> Result<Move> {
        let len_after_removal = if from_stage == to_stage {
            self.stage_len(to_stage).saturating_sub(1)
        } else {
            self.stage_len(to_stage)
        };
        self.move_across_stages(id, from_stage, to_stage, len_after_removal)
    }

    // ========================
    // Verification
    // ========================

    /// Every card in exactly one stage exactly once, arena and stages agree,
    /// and the maintained index equals a fresh rebuild.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let mut seen: HashMap<&ItemId, Stage> = HashMap::new();
        for stage in Stage::ALL {
            for id in self.stage_ids(stage) {
                if let Some(first) = seen.insert(id, stage) {
                    return Err(format!("{id} appears in both {first} and {stage}"));
                }
                if !self.items.contains_key(id) {
                    return Err(format!("{id} listed in {stage} but missing from arena"));
                }
            }
        }
        if seen.len() != self.items.len() {
            return Err(format!(
                "{} cards in stages but {} in arena",
                seen.len(),
                self.items.len()
            ));
        }
        if self.index != Index::build(self) {
            return Err("index out of date".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board, stage: Stage) -> Vec<&str> {
        board.stage_ids(stage).iter().map(|id| id.as_str()).collect()
    }

    fn board_with(columns: Vec<(Stage, Vec<&str>)>) -> Board {
        let seed = columns.into_iter().fold(BoardSeed::new(), |seed, (stage, ids)| {
            let items = ids.into_iter().map(|id| Item::new(id, format!("Card {id}"), "Buyer")).collect();
            seed.stage(stage, items)
        });
        Board::from_seed(seed).unwrap()
    }

    #[test]
    fn test_new_board_has_every_stage_empty() {
        let board = Board::new();
        for stage in Stage::ALL {
            assert_eq!(board.stage_len(stage), 0);
        }
        assert!(board.is_empty());
        assert_eq!(board.columns().count(), Stage::ALL.len());
    }

    #[test]
    fn test_seed_rejects_duplicate_ids_across_stages() {
        let seed = BoardSeed::new()
            .stage(Stage::New, vec![Item::new("A", "a", "x")])
            .stage(Stage::Done, vec![Item::new("A", "again", "y")]);
        let err = Board::from_seed(seed).unwrap_err();
        assert_eq!(
            err,
            BoardError::DuplicateItem {
                id: ItemId::from("A"),
                first: Stage::New,
                second: Stage::Done,
            }
        );
    }

    #[test]
    fn test_seed_rejects_item_id_equal_to_stage_id() {
        let seed = BoardSeed::new()
            .stage(Stage::New, vec![Item::new("done", "Card", "x"), Item::new("Z", "z", "x")])
            .stage(Stage::Quotes, vec![Item::new("A", "a", "y")]);
        let err = Board::from_seed(seed).unwrap_err();
        assert_eq!(
            err,
            BoardError::ReservedItemId {
                id: ItemId::from("done"),
                stage: Stage::Done,
            }
        );
        assert_eq!(err.to_string(), "item id done is reserved for stage done");
    }

    #[test]
    fn test_move_within_stage_forward() {
        let mut board = board_with(vec![(Stage::Proof, vec!["A", "B", "C", "D"])]);
        let mv = board.move_within_stage(Stage::Proof, 0, 2).unwrap();
        assert_eq!(ids(&board, Stage::Proof), vec!["B", "C", "A", "D"]);
        assert_eq!(mv.from, Location::new(Stage::Proof, 0));
        assert_eq!(mv.to, Location::new(Stage::Proof, 2));
        assert_eq!(board.locate("A"), Some(Location::new(Stage::Proof, 2)));
        assert_eq!(board.locate("B"), Some(Location::new(Stage::Proof, 0)));
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_move_within_stage_backward() {
        let mut board = board_with(vec![(Stage::Proof, vec!["A", "B", "C", "D"])]);
        board.move_within_stage(Stage::Proof, 3, 1).unwrap();
        assert_eq!(ids(&board, Stage::Proof), vec!["A", "D", "B", "C"]);
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_move_within_stage_same_position_is_noop() {
        let mut board = board_with(vec![(Stage::New, vec!["A", "B"])]);
        let before = board.clone();
        let mv = board.move_within_stage(Stage::New, 1, 1).unwrap();
        assert!(mv.is_noop());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_within_stage_out_of_range() {
        let mut board = board_with(vec![(Stage::New, vec!["A", "B"])]);
        let before = board.clone();
        let err = board.move_within_stage(Stage::New, 0, 2).unwrap_err();
        assert_eq!(
            err,
            BoardError::PositionOutOfRange {
                stage: Stage::New,
                position: 2,
                len: 2
            }
        );
        assert!(board.move_within_stage(Stage::Quotes, 0, 0).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_across_stages_inserts_before_target() {
        let mut board = board_with(vec![(Stage::New, vec!["A", "B", "C"]), (Stage::Done, vec!["X", "Y"])]);
        let mv = board.move_across_stages("B", Stage::New, Stage::Done, 1).unwrap();
        assert_eq!(ids(&board, Stage::New), vec!["A", "C"]);
        assert_eq!(ids(&board, Stage::Done), vec!["X", "B", "Y"]);
        assert_eq!(mv.from, Location::new(Stage::New, 1));
        assert_eq!(mv.to, Location::new(Stage::Done, 1));
        assert_eq!(board.locate("C"), Some(Location::new(Stage::New, 1)));
        assert_eq!(board.locate("Y"), Some(Location::new(Stage::Done, 2)));
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_move_across_stages_clamps_position() {
        let mut board = board_with(vec![(Stage::New, vec!["A"]), (Stage::Ready, vec!["X"])]);
        let mv = board.move_across_stages("A", Stage::New, Stage::Ready, 99).unwrap();
        assert_eq!(mv.to, Location::new(Stage::Ready, 1));
        assert_eq!(ids(&board, Stage::Ready), vec!["X", "A"]);
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_move_across_stages_wrong_origin_is_rejected() {
        let mut board = board_with(vec![(Stage::New, vec!["A"]), (Stage::Ready, vec!["X"])]);
        let before = board.clone();
        let err = board.move_across_stages("A", Stage::Quotes, Stage::Ready, 0).unwrap_err();
        assert!(matches!(err, BoardError::ItemNotInStage { .. }));
        let err = board.move_across_stages("Q", Stage::New, Stage::Ready, 0).unwrap_err();
        assert!(matches!(err, BoardError::UnknownItem { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_to_end_of_empty_stage() {
        let mut board = board_with(vec![(Stage::New, vec!["A", "B"])]);
        board.move_to_end_of_stage("A", Stage::New, Stage::Done).unwrap();
        assert_eq!(ids(&board, Stage::Done), vec!["A"]);
        assert_eq!(ids(&board, Stage::New), vec!["B"]);
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_move_to_end_of_own_stage() {
        let mut board = board_with(vec![(Stage::Quotes, vec!["A", "B", "C"])]);
        let mv = board.move_to_end_of_stage("A", Stage::Quotes, Stage::Quotes).unwrap();
        assert_eq!(ids(&board, Stage::Quotes), vec!["B", "C", "A"]);
        assert_eq!(mv.to, Location::new(Stage::Quotes, 2));
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_seed_round_trip() {
        let board = board_with(vec![(Stage::New, vec!["A"]), (Stage::Done, vec!["B", "C"])]);
        let rebuilt = Board::from_seed(board.to_seed()).unwrap();
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn test_from_json_unknown_stage() {
        let err = Board::from_json(r#"{"archived": []}"#).unwrap_err();
        assert!(matches!(err, BoardError::Seed { .. }));
    }
}
