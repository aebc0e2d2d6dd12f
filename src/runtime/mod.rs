//! Runtime module - drives the model from a command script
//!
//! - `app` - the script loop: parse, resolve, update, perform commands

pub mod app;

pub use app::{App, Flow};
