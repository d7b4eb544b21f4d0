//! Card Navigation
//!
//! Card actions hand the browser an opaque URL; routing lives elsewhere.

use kavaar_board::ItemId;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Header link for creating an order
pub const NEW_ORDER_HREF: &str = "/requests/new";

/// Characters escaped in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>').add(b'?').add(b'`').add(b'{').add(b'}').add(b'/').add(b'%');

/// Characters escaped in a query value
const QUERY_VALUE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>').add(b'&').add(b'=').add(b'+').add(b'%');

/// Buttons at the bottom of a card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Open,
    Message,
}

impl CardAction {
    pub const ALL: [CardAction; 2] = [CardAction::Open, CardAction::Message];

    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Open => "Open",
            CardAction::Message => "Message",
        }
    }

    pub fn href(&self, id: &ItemId) -> String {
        match self {
            CardAction::Open => format!("/orders/{}", utf8_percent_encode(id.as_str(), PATH_SEGMENT)),
            CardAction::Message => {
                format!("/messages/new?order={}", utf8_percent_encode(id.as_str(), QUERY_VALUE))
            }
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            CardAction::Open => "card-action primary",
            CardAction::Message => "card-action",
        }
    }
}

/// Send the browser to `href`
pub fn navigate(href: &str) {
    if let Some(win) = web_sys::window() {
        if let Err(err) = win.location().set_href(href) {
            tracing::warn!(?err, href, "navigation failed");
        }
    }
}
