//! Application model - the complete state of a grid editing session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod breakpoint;
pub mod editor;
pub mod error;
pub mod grid;
pub mod tile;
pub mod ui;

pub use breakpoint::{Breakpoint, INITIAL_ROWS, LG_COLUMNS, MD_COLUMNS, XL_COLUMNS};
pub use editor::EditorState;
pub use error::GridError;
pub use grid::{CellPosition, Grid};
pub use tile::{ContentKind, EditIntent, Tile, TileContent, TileId};
pub use ui::{ContentModalState, ModalId, ModalState, SwapModalState, UiState};

use crate::config::GridConfig;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// One grid per breakpoint
    pub editor: EditorState,
    /// Breakpoint currently being edited
    pub active: Breakpoint,
    /// UI state (status message, dialogs)
    pub ui: UiState,
    /// Configuration the grids were built from
    pub config: GridConfig,
}

impl AppModel {
    /// Create a new session with fresh grids
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        let editor = EditorState::new(&config)?;
        Ok(Self {
            editor,
            active: Breakpoint::default(),
            ui: UiState::new(),
            config,
        })
    }

    /// Create a session around existing grids
    pub fn with_editor(editor: EditorState, config: GridConfig) -> Self {
        Self {
            editor,
            active: Breakpoint::default(),
            ui: UiState::new(),
            config,
        }
    }

    /// Grid of the active breakpoint
    pub fn grid(&self) -> &Grid {
        self.editor.grid(self.active)
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        self.editor.grid_mut(self.active)
    }
}
