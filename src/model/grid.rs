//! Grid model - a row-major 2D array of tiles for one breakpoint
//!
//! Every operation that takes a [`TileId`] resolves it with [`Grid::locate`]
//! first. Ids that no longer resolve are ignored: the mutation is skipped and
//! the grid is left untouched.

use std::collections::HashSet;
use std::mem;

use crate::export::ExportRecord;

use super::error::GridError;
use super::tile::{ContentKind, EditIntent, Tile, TileContent, TileId};

/// Position of a cell in the grid (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A grid of tiles with a fixed column count
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    columns: usize,
    /// Counter backing the id allocator
    next_id: u64,
}

// Equality is by layout and content; the allocator counter is not observable
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns && self.rows == other.rows
    }
}

impl Eq for Grid {}

impl Grid {
    /// Create a grid of `rows` rows, all tiles empty
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        let mut grid = Self {
            rows: Vec::with_capacity(rows),
            columns,
            next_id: 0,
        };
        for _ in 0..rows {
            grid.append_row();
        }
        Ok(grid)
    }

    /// Build a grid from existing rows
    ///
    /// Every row must hold exactly `columns` tiles and ids must be unique.
    /// The id allocator starts past the largest base36 id already present.
    pub fn from_rows(columns: usize, rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        if columns == 0 {
            return Err(GridError::ZeroColumns);
        }
        let mut seen = HashSet::new();
        let mut next_id = 0;
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected: columns,
                    found: row.len(),
                });
            }
            for tile in row {
                if !seen.insert(&tile.id) {
                    return Err(GridError::DuplicateId(tile.id.clone()));
                }
                if let Some(n) = from_base36(tile.id.as_str()) {
                    next_id = next_id.max(n);
                }
            }
        }
        Ok(Self {
            rows,
            columns,
            next_id,
        })
    }

    // === Queries ===

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns
    }

    /// Number of non-empty tiles
    pub fn filled_count(&self) -> usize {
        self.tiles().filter(|t| !t.is_empty()).count()
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    pub fn get(&self, pos: CellPosition) -> Option<&Tile> {
        self.rows.get(pos.row)?.get(pos.col)
    }

    /// Find the position of a tile by id (row-major scan, first match)
    pub fn locate(&self, id: &TileId) -> Option<CellPosition> {
        self.rows.iter().enumerate().find_map(|(row, tiles)| {
            tiles
                .iter()
                .position(|t| &t.id == id)
                .map(|col| CellPosition::new(row, col))
        })
    }

    pub fn tile(&self, id: &TileId) -> Option<&Tile> {
        self.locate(id).and_then(|pos| self.get(pos))
    }

    /// Filled tiles a given tile could swap with, in row-major order
    pub fn swap_candidates(&self, source: &TileId) -> Vec<&Tile> {
        self.tiles()
            .filter(|t| !t.is_empty() && &t.id != source)
            .collect()
    }

    /// Non-empty tiles as export records, in row-major order
    pub fn export_filled(&self) -> Vec<ExportRecord> {
        self.tiles().filter_map(ExportRecord::from_tile).collect()
    }

    // === Editing ===

    /// Replace the tile at `pos`
    ///
    /// Returns false if `pos` is out of range or `tile.id` already names a
    /// tile at another position.
    pub fn set_tile(&mut self, pos: CellPosition, tile: Tile) -> bool {
        if let Some(existing) = self.locate(&tile.id) {
            if existing != pos {
                tracing::debug!(target: "grid", id = %tile.id, "id already used elsewhere");
                return false;
            }
        }
        match self.rows.get_mut(pos.row).and_then(|r| r.get_mut(pos.col)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Describe how the content editor should open for a tile
    pub fn start_edit(&self, id: &TileId) -> Option<EditIntent> {
        let tile = self.tile(id)?;
        Some(match (&tile.content.kind(), tile.content.payload()) {
            (Some(kind), Some(content)) => EditIntent::Edit {
                kind: *kind,
                content: content.to_string(),
            },
            _ => EditIntent::Create,
        })
    }

    /// Overwrite a tile's content, keeping its id
    ///
    /// `content` is trimmed; blank content is rejected.
    pub fn commit_edit(&mut self, id: &TileId, kind: ContentKind, content: &str) -> bool {
        let content = content.trim();
        if content.is_empty() {
            tracing::debug!(target: "grid", %id, "rejected blank content");
            return false;
        }
        let Some(pos) = self.locate(id) else {
            tracing::debug!(target: "grid", %id, "commit target not found");
            return false;
        };
        self.set_tile(
            pos,
            Tile {
                id: id.clone(),
                content: TileContent::filled(kind, content),
            },
        )
    }

    /// Reset a tile to empty under a freshly allocated id
    ///
    /// Returns the new id.
    pub fn delete_tile(&mut self, id: &TileId) -> Option<TileId> {
        let Some(pos) = self.locate(id) else {
            tracing::debug!(target: "grid", %id, "delete target not found");
            return None;
        };
        let new_id = self.fresh_id();
        self.set_tile(pos, Tile::empty(new_id.clone()));
        Some(new_id)
    }

    /// Exchange the content of two distinct filled tiles
    ///
    /// Ids stay at their positions; only kind and payload move.
    pub fn swap_tiles(&mut self, source: &TileId, target: &TileId) -> bool {
        if source == target {
            return false;
        }
        let (Some(a), Some(b)) = (self.locate(source), self.locate(target)) else {
            tracing::debug!(target: "grid", %source, other = %target, "swap id not found");
            return false;
        };
        if self.rows[a.row][a.col].is_empty() || self.rows[b.row][b.col].is_empty() {
            return false;
        }

        let source_content = mem::take(&mut self.rows[a.row][a.col].content);
        let target_content = mem::replace(&mut self.rows[b.row][b.col].content, source_content);
        self.rows[a.row][a.col].content = target_content;
        true
    }

    /// Append a row of fresh empty tiles. Returns the new row's index.
    pub fn append_row(&mut self) -> usize {
        let row = (0..self.columns)
            .map(|_| Tile::empty(self.fresh_id()))
            .collect();
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Panic if a row is the wrong width or an id repeats (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let mut seen = HashSet::new();
        for (index, row) in self.rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                self.columns,
                "[{}] row {} has wrong width",
                context,
                index
            );
            for tile in row {
                assert!(
                    seen.insert(&tile.id),
                    "[{}] duplicate tile id {}",
                    context,
                    tile.id
                );
            }
        }
    }

    /// Allocate an id not currently used by any tile in this grid
    fn fresh_id(&mut self) -> TileId {
        loop {
            self.next_id = self.next_id.wrapping_add(1);
            let id = TileId::new(to_base36(self.next_id));
            if self.locate(&id).is_none() {
                return id;
            }
        }
    }
}

/// Lowercase base36 only, so a parsed id round-trips through [`to_base36`]
fn from_base36(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()) {
        return None;
    }
    u64::from_str_radix(s, 36).ok()
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
