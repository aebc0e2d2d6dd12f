//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! grid state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=grid=debug,message=debug` - scoped filtering
//! - `RUST_LOG=tilegrid::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tilegrid/logs/tilegrid.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, Breakpoint, ModalId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so exports on stdout stay machine readable.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tilegrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the active grid for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub breakpoint: Breakpoint,
    pub rows: usize,
    pub filled: usize,
    /// Tile payloads in row-major order (empty string for empty tiles)
    pub payloads: Vec<String>,
    pub modal: Option<ModalId>,
}

impl GridSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let grid = model.grid();
        Self {
            breakpoint: model.active,
            rows: grid.row_count(),
            filled: grid.filled_count(),
            payloads: grid
                .tiles()
                .map(|t| t.content.payload().unwrap_or_default().to_string())
                .collect(),
            modal: model.ui.active_modal.as_ref().map(|m| m.id()),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        if self.breakpoint != other.breakpoint {
            return Some(format!(
                "breakpoint: {} → {}",
                self.breakpoint, other.breakpoint
            ));
        }

        let mut changes = Vec::new();
        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.filled != other.filled {
            changes.push(format!("filled: {} → {}", self.filled, other.filled));
        }
        let changed_cells = self
            .payloads
            .iter()
            .zip(&other.payloads)
            .filter(|(before, after)| before != after)
            .count();
        if changed_cells > 0 {
            changes.push(format!("{} cell(s) changed", changed_cells));
        }
        if self.modal != other.modal {
            changes.push(format!("modal: {:?} → {:?}", self.modal, other.modal));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
