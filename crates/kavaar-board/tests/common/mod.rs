//! Shared fixtures for board integration tests

#![allow(dead_code)]

use kavaar_board::{Board, BoardSeed, Item, Stage, Tone};

/// The prototype's mock orders, one card per stage
pub fn prototype_board() -> Board {
    let seed = BoardSeed::new()
        .stage(
            Stage::New,
            vec![Item::new("ORD-1052", "DTF on 20 tees", "Local Print Co.").with_tag(Tone::Neutral, "New")],
        )
        .stage(
            Stage::Quotes,
            vec![Item::new("REQ-318", "Embroidery on 12 polos", "Green Gym").with_tag(Tone::Warning, "Quote due")],
        )
        .stage(
            Stage::Proof,
            vec![Item::new("ORD-1042", "Custom Hoodie", "HSD Crafts")
                .with_eta("Tomorrow")
                .with_tag(Tone::Success, "Approve proof")],
        )
        .stage(
            Stage::InProd,
            vec![Item::new("ORD-1039", "Laser Engraved Card", "TeeDee")
                .with_eta("2 days")
                .with_tag(Tone::Neutral, "In production")],
        )
        .stage(
            Stage::Ready,
            vec![Item::new("ORD-1037", "DTF on 20 tees", "Local Print Co.")
                .with_eta("Fri")
                .with_tag(Tone::Info, "Pickup")],
        )
        .stage(
            Stage::Done,
            vec![Item::new("ORD-1001", "Engraved Bottle", "Atlas Events")
                .with_amount("$84.00")
                .with_tag(Tone::Success, "Paid")],
        );
    Board::from_seed(seed).expect("prototype seed is valid")
}

/// Board with single-letter card ids laid out per stage
pub fn letters(columns: Vec<(Stage, Vec<&str>)>) -> Board {
    let seed = columns.into_iter().fold(BoardSeed::new(), |seed, (stage, ids)| {
        seed.stage(stage, ids.into_iter().map(|id| Item::new(id, format!("Card {id}"), "Buyer")).collect())
    });
    Board::from_seed(seed).expect("letter seed is valid")
}

/// Card ids of one stage
pub fn ids(board: &Board, stage: Stage) -> Vec<String> {
    board.stage_ids(stage).iter().map(|id| id.to_string()).collect()
}
