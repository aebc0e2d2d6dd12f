//! Export records - the stable output shape of a filled grid
//!
//! Each record is a flat JSON object with the tile id and exactly one
//! content field:
//!
//! ```json
//! [{ "id": "2", "imageUrl": "a.png" }, { "id": "3", "text": "hi" }]
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Tile, TileContent, TileId};

/// Content field of an exported tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportContent {
    ImageUrl(String),
    Text(String),
}

/// A single exported tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub id: TileId,
    #[serde(flatten)]
    pub content: ExportContent,
}

impl ExportRecord {
    /// Convert a tile, `None` for empty tiles
    pub fn from_tile(tile: &Tile) -> Option<Self> {
        let content = match &tile.content {
            TileContent::Empty => return None,
            TileContent::Image(url) => ExportContent::ImageUrl(url.clone()),
            TileContent::Text(body) => ExportContent::Text(body.clone()),
        };
        Some(Self {
            id: tile.id.clone(),
            content,
        })
    }
}

/// Serialize records as a pretty JSON array
pub fn to_json(records: &[ExportRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
