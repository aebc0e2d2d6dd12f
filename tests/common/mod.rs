//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use tilegrid::config::GridConfig;
use tilegrid::model::{AppModel, Breakpoint, CellPosition, EditorState, Grid, Tile, TileId};

/// Fresh session with default config (4 rows; 4/6/8 columns)
pub fn test_model() -> AppModel {
    AppModel::new(GridConfig::default()).unwrap()
}

/// The two-by-two grid used throughout the docs:
///
/// ```text
/// [ Empty(1)   Image(2, "a.png") ]
/// [ Text(3,"hi") Empty(4)        ]
/// ```
pub fn example_grid() -> Grid {
    Grid::from_rows(
        2,
        vec![
            vec![Tile::empty("1".into()), Tile::image("2", "a.png")],
            vec![Tile::text("3", "hi"), Tile::empty("4".into())],
        ],
    )
    .unwrap()
}

/// Session whose `md` grid is [`example_grid`]
pub fn example_model() -> AppModel {
    let config = GridConfig::default();
    let lg = Grid::new(config.columns(Breakpoint::Lg), config.initial_rows).unwrap();
    let xl = Grid::new(config.columns(Breakpoint::Xl), config.initial_rows).unwrap();
    AppModel::with_editor(EditorState::from_grids(example_grid(), lg, xl), config)
}

/// Id of the tile at (row, col) in the active grid
pub fn id_at(model: &AppModel, row: usize, col: usize) -> TileId {
    model
        .grid()
        .get(CellPosition::new(row, col))
        .map(|t| t.id.clone())
        .expect("cell in range")
}

pub fn tid(id: &str) -> TileId {
    TileId::from(id)
}
