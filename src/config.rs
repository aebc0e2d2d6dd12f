//! Grid configuration
//!
//! Read from `~/.config/tilegrid/config.yaml`. Every field is optional:
//!
//! ```yaml
//! initial_rows: 4
//! columns:
//!   md: 4
//!   lg: 6
//!   xl: 8
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Breakpoint, GridError, INITIAL_ROWS};

/// Errors from loading an explicit config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(#[from] GridError),
}

/// Column count per breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointColumns {
    #[serde(default = "default_md")]
    pub md: usize,
    #[serde(default = "default_lg")]
    pub lg: usize,
    #[serde(default = "default_xl")]
    pub xl: usize,
}

fn default_md() -> usize {
    Breakpoint::Md.default_columns()
}

fn default_lg() -> usize {
    Breakpoint::Lg.default_columns()
}

fn default_xl() -> usize {
    Breakpoint::Xl.default_columns()
}

impl Default for BreakpointColumns {
    fn default() -> Self {
        Self {
            md: default_md(),
            lg: default_lg(),
            xl: default_xl(),
        }
    }
}

impl BreakpointColumns {
    pub fn get(&self, breakpoint: Breakpoint) -> usize {
        match breakpoint {
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

/// Grid layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Rows each grid starts with
    #[serde(default = "default_initial_rows")]
    pub initial_rows: usize,
    #[serde(default)]
    pub columns: BreakpointColumns,
}

fn default_initial_rows() -> usize {
    INITIAL_ROWS
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            initial_rows: default_initial_rows(),
            columns: BreakpointColumns::default(),
        }
    }
}

impl GridConfig {
    /// Column count for a breakpoint
    pub fn columns(&self, breakpoint: Breakpoint) -> usize {
        self.columns.get(breakpoint)
    }

    /// Reject configurations that cannot produce a grid
    pub fn validate(&self) -> Result<(), GridError> {
        for bp in Breakpoint::ALL {
            if self.columns(bp) == 0 {
                return Err(GridError::ZeroBreakpointColumns(bp));
            }
        }
        Ok(())
    }

    /// Load config from the default location, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}
