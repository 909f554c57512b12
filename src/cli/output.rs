//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Actor;
use crate::error::Error;
use crate::query::SortSpec;
use crate::storage::StorageStats;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a status response.
#[must_use]
pub fn format_status(stats: &StorageStats, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            output.push_str("actor-store status\n");
            output.push_str("==================\n\n");
            let _ = writeln!(output, "  Actors:      {}", stats.actor_count);
            let _ = writeln!(output, "  Categories:  {}", stats.category_count);
            let _ = writeln!(output, "  Schema:      v{}", stats.schema_version);
            if let Some(size) = stats.db_size {
                let _ = writeln!(output, "  DB size:     {size} bytes");
            }
            output
        }
        OutputFormat::Json => format_json(stats),
    }
}

/// Formats a sorted actor list as a table.
#[must_use]
pub fn format_actor_list(actors: &[Actor], spec: SortSpec, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_actor_list_text(actors, spec),
        OutputFormat::Json => format_json(&actors),
    }
}

fn format_actor_list_text(actors: &[Actor], spec: SortSpec) -> String {
    if actors.is_empty() {
        return "No actors found.\n".to_string();
    }

    let mut output = String::new();
    let _ = writeln!(output, "Actors (by {} {}):", spec.field, spec.order);
    let _ = writeln!(output, "{:<6} {:<28} Categories", "ID", "Name");
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for actor in actors {
        let _ = writeln!(
            output,
            "{:<6} {:<28} {}",
            actor.id,
            truncate(&actor.name, 28),
            truncate(&actor.categories_label(), 36)
        );
    }

    output
}

/// Formats a single actor.
#[must_use]
pub fn format_actor(actor: &Actor, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Actor: {}", actor.name);
            let _ = writeln!(output, "  ID:          {}", actor.id);
            let _ = writeln!(output, "  Categories:  {}", actor.categories_label());
            output
        }
        OutputFormat::Json => format_json(actor),
    }
}

/// Formats a one-line confirmation message.
#[must_use]
pub fn format_message(message: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{message}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Message<'a> {
                status: &'static str,
                message: &'a str,
            }
            format_json(&Message {
                status: "ok",
                message,
            })
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to `max_chars` characters with ellipsis.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        s.chars().take(max_chars).collect()
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{head}...")
    }
}
