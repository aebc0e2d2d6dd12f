//! Editor state - one independent grid per breakpoint

use crate::config::GridConfig;

use super::breakpoint::Breakpoint;
use super::error::GridError;
use super::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    md: Grid,
    lg: Grid,
    xl: Grid,
}

impl EditorState {
    /// Fresh grids sized from the config, all tiles empty
    pub fn new(config: &GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        let grid = |bp: Breakpoint| Grid::new(config.columns(bp), config.initial_rows);
        Ok(Self {
            md: grid(Breakpoint::Md)?,
            lg: grid(Breakpoint::Lg)?,
            xl: grid(Breakpoint::Xl)?,
        })
    }

    /// Build from existing grids
    pub fn from_grids(md: Grid, lg: Grid, xl: Grid) -> Self {
        Self { md, lg, xl }
    }

    pub fn grid(&self, breakpoint: Breakpoint) -> &Grid {
        match breakpoint {
            Breakpoint::Md => &self.md,
            Breakpoint::Lg => &self.lg,
            Breakpoint::Xl => &self.xl,
        }
    }

    pub fn grid_mut(&mut self, breakpoint: Breakpoint) -> &mut Grid {
        match breakpoint {
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        }
    }
}
