//! Order Cards
//!
//! An item is one order or quote request on the board. Identity is the id;
//! two items with equal content but different ids are different cards.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Board-unique, lifetime-stable card identifier (e.g. `ORD-1042`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Badge severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warning,
    Success,
    #[default]
    Neutral,
    Info,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Warning => "warning",
            Tone::Success => "success",
            Tone::Neutral => "neutral",
            Tone::Info => "info",
        }
    }
}

/// Badge shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tone: Tone,
    pub label: String,
}

impl Tag {
    pub fn new(tone: Tone, label: impl Into<String>) -> Self {
        Self {
            tone,
            label: label.into(),
        }
    }
}

/// One order/request card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// The other party on the order. Seeds call this `buyer`.
    #[serde(alias = "buyer")]
    pub counterparty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl Item {
    /// Create a card with no ETA, amount or badges
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>, counterparty: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            counterparty: counterparty.into(),
            eta: None,
            amount: None,
            tags: Vec::new(),
        }
    }

    pub fn with_eta(mut self, eta: impl Into<String>) -> Self {
        self.eta = Some(eta.into());
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_tag(mut self, tone: Tone, label: impl Into<String>) -> Self {
        self.tags.push(Tag::new(tone, label));
        self
    }

    /// Lowercased `id + title + counterparty`, the text a search query runs against
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.id.as_str().len() + self.title.len() + self.counterparty.len(),
        );
        text.push_str(self.id.as_str());
        text.push_str(&self.title);
        text.push_str(&self.counterparty);
        text.to_lowercase()
    }

    /// `needle` must already be lowercased
    pub fn matches(&self, needle: &str) -> bool {
        self.search_text().contains(needle)
    }
}
