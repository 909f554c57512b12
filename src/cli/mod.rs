//! CLI layer for actor-store.
//!
//! Provides the command-line front end using clap. It reaches the store
//! only through the data access facade.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
