//! Domain DTOs for the whiteboard API.
//!
//! # Design
//! These types mirror the remote service's JSON schema but are defined
//! independently from the mock-server crate; integration tests catch schema
//! drift. Widgets are a closed set of kinds discriminated by the `type`
//! field, modeled as an internally tagged serde enum so that a missing or
//! unrecognized discriminator is a deserialization error rather than a
//! silent fallthrough.

use serde::{Deserialize, Serialize};

/// A board returned by the API. An immutable snapshot of remote state at
/// fetch time; the id is an opaque server-issued string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Request payload for creating a new board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBoard {
    pub name: String,
    pub description: String,
}

/// Placement of a widget on its board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// An element placed on a board, one of a closed set of kinds.
///
/// The JSON representation carries a `type` discriminator (`"sticker"`,
/// `"shape"`, `"text"`, `"card"`, `"image"`); every kind has an `id` and a
/// `position` plus its kind-specific fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    Sticker {
        id: String,
        position: Position,
        text: String,
    },
    Shape {
        id: String,
        position: Position,
        text: String,
    },
    Text {
        id: String,
        position: Position,
        text: String,
    },
    Card {
        id: String,
        position: Position,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Image {
        id: String,
        position: Position,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
}

impl Widget {
    /// The server-issued widget id.
    pub fn id(&self) -> &str {
        match self {
            Widget::Sticker { id, .. }
            | Widget::Shape { id, .. }
            | Widget::Text { id, .. }
            | Widget::Card { id, .. }
            | Widget::Image { id, .. } => id,
        }
    }

    /// Where the widget sits on the board.
    pub fn position(&self) -> Position {
        match self {
            Widget::Sticker { position, .. }
            | Widget::Shape { position, .. }
            | Widget::Text { position, .. }
            | Widget::Card { position, .. }
            | Widget::Image { position, .. } => *position,
        }
    }
}
