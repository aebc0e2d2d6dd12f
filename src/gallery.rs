//! Read-only gallery built from an edited grid
//!
//! The gallery consumes export records (or a grid directly) and lays the
//! items out in fixed-width rows for display.

use serde::{Deserialize, Serialize};

use crate::export::{ExportContent, ExportRecord};
use crate::model::{Grid, TileContent, TileId};

/// One gallery cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: TileId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Transparent placeholder
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub empty: bool,
}

impl GalleryItem {
    pub fn placeholder(id: TileId) -> Self {
        Self {
            id,
            image_url: None,
            text: None,
            empty: true,
        }
    }
}

impl From<ExportRecord> for GalleryItem {
    fn from(record: ExportRecord) -> Self {
        let (image_url, text) = match record.content {
            ExportContent::ImageUrl(url) => (Some(url), None),
            ExportContent::Text(body) => (None, Some(body)),
        };
        Self {
            id: record.id,
            image_url,
            text,
            empty: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    pub items: Vec<GalleryItem>,
}

impl Gallery {
    /// Gallery of filled tiles only
    pub fn from_records(records: impl IntoIterator<Item = ExportRecord>) -> Self {
        Self {
            items: records.into_iter().map(GalleryItem::from).collect(),
        }
    }

    /// Gallery mirroring the grid layout, with empty cells kept as placeholders
    pub fn from_grid(grid: &Grid) -> Self {
        let items = grid
            .tiles()
            .map(|tile| match &tile.content {
                TileContent::Empty => GalleryItem::placeholder(tile.id.clone()),
                TileContent::Image(url) => GalleryItem {
                    id: tile.id.clone(),
                    image_url: Some(url.clone()),
                    text: None,
                    empty: false,
                },
                TileContent::Text(body) => GalleryItem {
                    id: tile.id.clone(),
                    image_url: None,
                    text: Some(body.clone()),
                    empty: false,
                },
            })
            .collect();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items chunked into rows of `columns` (the last row may be shorter)
    pub fn rows(&self, columns: usize) -> Vec<&[GalleryItem]> {
        self.items.chunks(columns.max(1)).collect()
    }
}
