//! CLI command implementations.
//!
//! Each command opens the store through [`ActorService`], runs one facade
//! operation and renders the result.

use crate::cli::output::{
    OutputFormat, format_actor, format_actor_list, format_message, format_status,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::Actor;
use crate::error::{CommandError, Result, StorageError};
use crate::query::{SortField, SortOrder, SortSpec};
use crate::service::ActorService;
use std::path::Path;

/// Executes the CLI command.
///
/// Returns the text to print on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub async fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let db_path = cli.get_db_path();

    match &cli.command {
        Commands::Init { force } => cmd_init(&db_path, *force, format).await,
        Commands::Status => cmd_status(&db_path, format).await,
        Commands::Reset { yes } => cmd_reset(&db_path, *yes, format).await,
        Commands::List { sort, order } => cmd_list(&db_path, sort, order, format).await,
        Commands::Show { id } => cmd_show(&db_path, *id, format).await,
        Commands::Update {
            id,
            name,
            categories,
            clear_categories,
        } => {
            cmd_update(
                &db_path,
                *id,
                name.as_deref(),
                categories,
                *clear_categories,
                format,
            )
            .await
        }
        Commands::Delete { id } => cmd_delete(&db_path, *id, format).await,
    }
}

/// Opens the store, refusing to create a database that `init` never made.
async fn open_service(db_path: &Path) -> Result<ActorService> {
    if !db_path.exists() {
        return Err(StorageError::NotInitialized.into());
    }
    ActorService::open(db_path).await
}

// ==================== Command Implementations ====================

async fn cmd_init(db_path: &Path, force: bool, format: OutputFormat) -> Result<String> {
    if db_path.exists() {
        if !force {
            return Err(CommandError::ExecutionFailed(
                "Database already exists. Use --force to reinitialize.".to_string(),
            )
            .into());
        }
        remove_database(db_path)?;
    }

    let service = ActorService::open(db_path).await?;
    let stats = service.stats().await?;
    service.close().await?;

    let message = format!(
        "Initialized actor store at {} with {} actors.",
        db_path.display(),
        stats.actor_count
    );
    Ok(format_message(&message, format))
}

async fn cmd_status(db_path: &Path, format: OutputFormat) -> Result<String> {
    let service = open_service(db_path).await?;
    let stats = service.stats().await?;
    Ok(format_status(&stats, format))
}

async fn cmd_reset(db_path: &Path, yes: bool, format: OutputFormat) -> Result<String> {
    if !yes {
        return Err(CommandError::ExecutionFailed(
            "Use --yes to confirm reset. This replaces all actors with the initial set."
                .to_string(),
        )
        .into());
    }

    let service = open_service(db_path).await?;
    service.reset().await?;
    Ok(format_message(
        "Actor store reset to initial data.",
        format,
    ))
}

async fn cmd_list(db_path: &Path, sort: &str, order: &str, format: OutputFormat) -> Result<String> {
    let spec = SortSpec::new(sort.parse::<SortField>()?, order.parse::<SortOrder>()?);
    let service = open_service(db_path).await?;
    let actors = service.fetch_all_sorted(spec).await?;
    Ok(format_actor_list(&actors, spec, format))
}

async fn cmd_show(db_path: &Path, id: i64, format: OutputFormat) -> Result<String> {
    let service = open_service(db_path).await?;
    let actor = service
        .get(id)
        .await?
        .ok_or(StorageError::ActorNotFound { id })?;
    Ok(format_actor(&actor, format))
}

async fn cmd_update(
    db_path: &Path,
    id: i64,
    name: Option<&str>,
    categories: &[String],
    clear_categories: bool,
    format: OutputFormat,
) -> Result<String> {
    if name.is_none() && categories.is_empty() && !clear_categories {
        return Err(CommandError::InvalidArgument(
            "nothing to update: pass --name, --category or --clear-categories".to_string(),
        )
        .into());
    }

    let service = open_service(db_path).await?;
    let current = service
        .get(id)
        .await?
        .ok_or(StorageError::ActorNotFound { id })?;

    let categories = if clear_categories {
        Vec::new()
    } else if categories.is_empty() {
        current.categories
    } else {
        categories.to_vec()
    };
    let edited = Actor {
        id,
        name: name.map_or(current.name, String::from),
        categories,
    };

    service.update(&edited).await?;
    Ok(format_actor(&edited, format))
}

async fn cmd_delete(db_path: &Path, id: i64, format: OutputFormat) -> Result<String> {
    let service = open_service(db_path).await?;
    let existed = service.get(id).await?.is_some();
    service.delete(id).await?;

    let message = if existed {
        format!("Deleted actor {id}.")
    } else {
        format!("No actor with id {id}; nothing deleted.")
    };
    Ok(format_message(&message, format))
}

/// Deletes a database file along with its WAL side files.
fn remove_database(db_path: &Path) -> Result<()> {
    std::fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = db_path.as_os_str().to_owned();
        side.push(suffix);
        let side = Path::new(&side);
        if side.exists() {
            std::fs::remove_file(side)?;
        }
    }
    Ok(())
}
