//! Property tests for grid invariants under random operation sequences

use std::collections::HashSet;

use proptest::prelude::*;

use tilegrid::model::{CellPosition, ContentKind, Grid, TileId};

#[derive(Debug, Clone)]
enum Op {
    Commit(usize, bool, String),
    Delete(usize),
    Swap(usize, usize),
    AppendRow,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..64, any::<bool>(), "[a-z ]{0,8}").prop_map(|(i, text, s)| Op::Commit(i, text, s)),
        (0usize..64).prop_map(Op::Delete),
        (0usize..64, 0usize..64).prop_map(|(a, b)| Op::Swap(a, b)),
        Just(Op::AppendRow),
    ]
}

/// Id of the nth tile (wrapping) in row-major order
fn nth_id(grid: &Grid, n: usize) -> Option<TileId> {
    let count = grid.cell_count();
    if count == 0 {
        return None;
    }
    grid.tiles().nth(n % count).map(|t| t.id.clone())
}

fn apply(grid: &mut Grid, op: &Op) {
    match op {
        Op::Commit(i, text, content) => {
            if let Some(id) = nth_id(grid, *i) {
                let kind = if *text { ContentKind::Text } else { ContentKind::Image };
                grid.commit_edit(&id, kind, content);
            }
        }
        Op::Delete(i) => {
            if let Some(id) = nth_id(grid, *i) {
                grid.delete_tile(&id);
            }
        }
        Op::Swap(a, b) => {
            if let (Some(a), Some(b)) = (nth_id(grid, *a), nth_id(grid, *b)) {
                grid.swap_tiles(&a, &b);
            }
        }
        Op::AppendRow => {
            grid.append_row();
        }
    }
}

proptest! {
    /// Property: ids stay unique and rows keep their width
    #[test]
    fn prop_ids_unique_after_random_ops(
        columns in 1usize..9,
        rows in 0usize..5,
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut grid = Grid::new(columns, rows).unwrap();
        for op in &ops {
            apply(&mut grid, op);
        }

        let ids: HashSet<_> = grid.tiles().map(|t| t.id.clone()).collect();
        prop_assert_eq!(ids.len(), grid.cell_count());
        for row in grid.rows() {
            prop_assert_eq!(row.len(), columns);
        }
    }

    /// Property: swapping the same pair twice restores the grid
    #[test]
    fn prop_swap_is_involution(
        ops in prop::collection::vec(op(), 0..40),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let mut grid = Grid::new(4, 4).unwrap();
        for op in &ops {
            apply(&mut grid, op);
        }
        let before = grid.clone();
        let (a, b) = (nth_id(&grid, a).unwrap(), nth_id(&grid, b).unwrap());

        let first = grid.swap_tiles(&a, &b);
        let second = grid.swap_tiles(&a, &b);

        prop_assert_eq!(first, second);
        prop_assert_eq!(grid, before);
    }

    /// Property: swapping moves content only; every id stays at its position
    #[test]
    fn prop_swap_preserves_positions(
        ops in prop::collection::vec(op(), 0..40),
        a in 0usize..64,
        b in 0usize..64,
    ) {
        let mut grid = Grid::new(6, 4).unwrap();
        for op in &ops {
            apply(&mut grid, op);
        }
        let ids: Vec<_> = grid.tiles().map(|t| t.id.clone()).collect();
        let (a, b) = (nth_id(&grid, a).unwrap(), nth_id(&grid, b).unwrap());

        grid.swap_tiles(&a, &b);

        let after: Vec<_> = grid.tiles().map(|t| t.id.clone()).collect();
        prop_assert_eq!(after, ids);
    }

    /// Property: export lists exactly the filled tiles, none with blank content
    #[test]
    fn prop_export_matches_filled_tiles(
        ops in prop::collection::vec(op(), 0..60),
    ) {
        let mut grid = Grid::new(8, 4).unwrap();
        for op in &ops {
            apply(&mut grid, op);
        }

        let records = grid.export_filled();
        prop_assert_eq!(records.len(), grid.filled_count());

        let filled: Vec<_> = grid
            .tiles()
            .filter(|t| !t.is_empty())
            .map(|t| t.id.clone())
            .collect();
        let exported: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(exported, filled);

        for tile in grid.tiles() {
            if let Some(payload) = tile.content.payload() {
                prop_assert!(!payload.trim().is_empty());
            }
        }
    }

    /// Property: appending a row adds one row of fresh empty tiles
    #[test]
    fn prop_append_row_adds_fresh_empty_row(
        columns in 1usize..9,
        rows in 0usize..6,
    ) {
        let mut grid = Grid::new(columns, rows).unwrap();
        let before: HashSet<_> = grid.tiles().map(|t| t.id.clone()).collect();

        let index = grid.append_row();

        prop_assert_eq!(index, rows);
        prop_assert_eq!(grid.row_count(), rows + 1);
        for col in 0..columns {
            let tile = grid.get(CellPosition::new(index, col)).unwrap();
            prop_assert!(tile.is_empty());
            prop_assert!(!before.contains(&tile.id));
        }
    }
}
