//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::export::ExportRecord;
use crate::model::Breakpoint;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the editor
    Redraw,
    /// Hand exported records to the host
    Export {
        breakpoint: Breakpoint,
        records: Vec<ExportRecord>,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Export doesn't change state
            Cmd::Export { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_leaves(self) -> Vec<Cmd> {
        match self {
            Cmd::None => vec![],
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_leaves).collect(),
            other => vec![other],
        }
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
