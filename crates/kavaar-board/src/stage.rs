//! Stage Catalogue
//!
//! Workflow columns of the order board. The set is static configuration:
//! stages are never created or removed at runtime, and declaration order is
//! column display order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A workflow step for an order or quote request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Fresh orders nobody has looked at yet
    New,
    /// Requests waiting on a quote
    Quotes,
    /// Proof sent, waiting on buyer approval
    Proof,
    /// Being made
    InProd,
    /// Ready for pickup or shipping
    Ready,
    /// Delivered and settled
    Done,
}

impl Stage {
    /// Number of stages
    pub const COUNT: usize = 6;

    /// All stages in display order
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::New,
        Stage::Quotes,
        Stage::Proof,
        Stage::InProd,
        Stage::Ready,
        Stage::Done,
    ];

    /// Stable id used on the wire and as a droppable id
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Quotes => "quotes",
            Stage::Proof => "proof",
            Stage::InProd => "inprod",
            Stage::Ready => "ready",
            Stage::Done => "done",
        }
    }

    /// Column header text
    pub fn label(&self) -> &'static str {
        match self {
            Stage::New => "New",
            Stage::Quotes => "Quotes",
            Stage::Proof => "Proof",
            Stage::InProd => "In production",
            Stage::Ready => "Ready/Pickup",
            Stage::Done => "Completed",
        }
    }

    /// Exact match on a stage id. Anything else is not a stage.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|stage| stage.as_str() == id)
    }

    /// Position of this stage in `ALL`
    pub(crate) fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
