//! On-disk locations used by tilegrid
//!
//! ```text
//! <config home>/tilegrid/
//!     config.yaml    initial rows and per-breakpoint column counts
//!     logs/          tilegrid.log, rotated daily by the tracing file layer
//! ```
//!
//! `<config home>` is `$XDG_CONFIG_HOME` or `~/.config`, and the platform
//! config directory on Windows.

use std::{fs, io, path::PathBuf};

const APP_DIR: &str = "tilegrid";

/// `<config home>/tilegrid`, or `None` when no home directory is known
pub fn config_dir() -> Option<PathBuf> {
    config_home().map(|home| home.join(APP_DIR))
}

#[cfg(not(target_os = "windows"))]
fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

#[cfg(target_os = "windows")]
fn config_home() -> Option<PathBuf> {
    dirs::config_dir()
}

/// Grid config read at startup when no `--config` is given
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory for logs"))?;
    fs::create_dir_all(&logs)?;
    Ok(logs)
}
