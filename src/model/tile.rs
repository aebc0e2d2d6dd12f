//! Tile types - the addressable cells of a grid

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tile identifier, unique within a single grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The kind of content a filled tile can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Image,
    Text,
}

impl ContentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Text => "text",
        }
    }

    /// Parse a kind name as typed by the user ("image", "img", "text", "txt")
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "image" | "img" => Some(ContentKind::Image),
            "text" | "txt" => Some(ContentKind::Text),
            _ => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a tile currently shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TileContent {
    #[default]
    Empty,
    /// Image URL
    Image(String),
    /// Text body
    Text(String),
}

impl TileContent {
    /// Build filled content from a kind and payload
    pub fn filled(kind: ContentKind, payload: impl Into<String>) -> Self {
        match kind {
            ContentKind::Image => TileContent::Image(payload.into()),
            ContentKind::Text => TileContent::Text(payload.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TileContent::Empty)
    }

    /// Kind of a filled tile, `None` when empty
    pub fn kind(&self) -> Option<ContentKind> {
        match self {
            TileContent::Empty => None,
            TileContent::Image(_) => Some(ContentKind::Image),
            TileContent::Text(_) => Some(ContentKind::Text),
        }
    }

    /// URL or text body, `None` when empty
    pub fn payload(&self) -> Option<&str> {
        match self {
            TileContent::Empty => None,
            TileContent::Image(url) => Some(url),
            TileContent::Text(body) => Some(body),
        }
    }
}

/// One cell of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub content: TileContent,
}

impl Tile {
    pub fn empty(id: TileId) -> Self {
        Self {
            id,
            content: TileContent::Empty,
        }
    }

    pub fn image(id: impl Into<TileId>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: TileContent::Image(url.into()),
        }
    }

    pub fn text(id: impl Into<TileId>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: TileContent::Text(body.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// What the content editor should show when a tile is opened for editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// Empty tile: the user must pick a kind before entering content
    Create,
    /// Filled tile: pre-populate the editor with the current content
    Edit { kind: ContentKind, content: String },
}
