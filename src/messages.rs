//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Breakpoint, ContentKind, TileId};

/// Grid-level intents dispatched by the presentation layer
///
/// Ids always refer to the grid of the active breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridMsg {
    /// Switch the breakpoint being edited
    SelectBreakpoint(Breakpoint),
    /// Open the content editor for a tile
    StartEdit(TileId),
    /// Write content directly (bypasses the dialog)
    CommitEdit {
        id: TileId,
        kind: ContentKind,
        content: String,
    },
    /// Reset a tile to empty
    Delete(TileId),
    /// Open the swap picker for a filled tile
    StartSwap(TileId),
    /// Exchange content directly (bypasses the dialog)
    Swap { source: TileId, target: TileId },
    /// Add a row of empty tiles at the bottom
    AppendRow,
    /// Export filled tiles of the active grid
    Export,
}

/// Dialog messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMsg {
    /// Choose image or text (content editor, create mode only)
    SetKind(ContentKind),
    /// Replace the content editor input
    SetInput(String),
    /// Save the content editor
    Save,
    /// Select or deselect a swap target
    ToggleSwapTarget(TileId),
    /// Confirm the selected swap
    ConfirmSwap,
    /// Close the active dialog without changes
    Close,
}

/// Application lifecycle messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Rebuild every grid from the config
    Reset,
    /// End the session
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Grid(GridMsg),
    Modal(ModalMsg),
    App(AppMsg),
}
