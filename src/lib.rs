//! tilegrid - Elm-style grid layout editor
//!
//! This crate provides the core types and logic for editing image and text
//! tiles in per-breakpoint grids, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod gallery;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod script;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::AppModel;
