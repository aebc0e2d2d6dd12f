//! Command-line argument parsing for the grid editor
//!
//! Supports:
//! - Reading a command script from a file or stdin
//! - An explicit config file
//! - Choosing the initially active breakpoint
//! - Rendering after each change and printing the gallery at exit

use clap::Parser;
use std::path::PathBuf;

use crate::model::Breakpoint;

/// A headless grid layout editor
#[derive(Parser, Debug)]
#[command(name = "tilegrid", version, about = "A headless grid layout editor")]
pub struct CliArgs {
    /// Command script to run (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Config file (defaults to ~/.config/tilegrid/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Breakpoint to start editing
    #[arg(short, long, value_name = "md|lg|xl", default_value = "md")]
    pub breakpoint: Breakpoint,

    /// Print the editor after every change
    #[arg(short, long)]
    pub render: bool,

    /// Print the gallery of the active breakpoint before exiting
    #[arg(short, long)]
    pub gallery: bool,
}

/// Where script lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Stdin,
    File(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: ScriptSource,
    pub config_path: Option<PathBuf>,
    pub breakpoint: Breakpoint,
    pub render: bool,
    pub gallery: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let source = match self.script {
            // "-" is the conventional spelling of stdin
            Some(path) if path.as_os_str() == "-" => ScriptSource::Stdin,
            Some(path) => ScriptSource::File(path),
            None => ScriptSource::Stdin,
        };
        StartupConfig {
            source,
            config_path: self.config,
            breakpoint: self.breakpoint,
            render: self.render,
            gallery: self.gallery,
        }
    }
}
