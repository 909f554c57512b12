//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// actor-store: browse and edit the local actor collection.
#[derive(Parser, Debug)]
#[command(name = "actor-store")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the database file.
    ///
    /// Defaults to `.actor-store/local.db` in the current directory.
    #[arg(short, long, env = "ACTOR_STORE_DB", global = true)]
    pub db_path: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and insert the initial actors.
    Init {
        /// Remove an existing database first.
        #[arg(short, long)]
        force: bool,
    },

    /// Show store status.
    Status,

    /// Replace all actors with the initial set.
    Reset {
        /// Skip confirmation prompt.
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all actors.
    #[command(name = "list", alias = "ls")]
    List {
        /// Field to sort by (name, categories).
        #[arg(short, long, default_value = "name")]
        sort: String,

        /// Sort direction (asc, desc).
        #[arg(short, long, default_value = "asc")]
        order: String,
    },

    /// Show one actor.
    Show {
        /// Actor id.
        id: i64,
    },

    /// Edit an actor's name and categories.
    Update {
        /// Actor id.
        id: i64,

        /// New name (keeps the current name if omitted).
        #[arg(short, long)]
        name: Option<String>,

        /// Category tag; repeat to set several. Replaces the current list.
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Remove all categories.
        #[arg(long, conflicts_with = "categories")]
        clear_categories: bool,
    },

    /// Delete an actor.
    #[command(name = "delete", alias = "rm")]
    Delete {
        /// Actor id.
        id: i64,
    },
}

impl Cli {
    /// Returns the database path, using the default if not specified.
    #[must_use]
    pub fn get_db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::storage::DEFAULT_DB_PATH))
    }
}
