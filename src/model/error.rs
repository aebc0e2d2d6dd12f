//! Grid construction error types

use thiserror::Error;

use super::breakpoint::Breakpoint;
use super::tile::TileId;

/// Errors raised when building a grid or an editor state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A grid needs at least one column
    #[error("grid must have at least one column")]
    ZeroColumns,

    /// Configured column count for a breakpoint is zero
    #[error("breakpoint {0} must have at least one column")]
    ZeroBreakpointColumns(Breakpoint),

    /// A row does not match the grid's column count
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two tiles share an id
    #[error("duplicate tile id '{0}'")]
    DuplicateId(TileId),
}
