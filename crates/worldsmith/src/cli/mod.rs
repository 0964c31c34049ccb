//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the worldsmith binary.

mod categories;
mod commands;
mod export;
mod generate;

pub use categories::list_categories;
pub use commands::{Cli, Commands};
pub use export::export_saved_world;
pub use generate::{GenerateOptions, run_generate};
