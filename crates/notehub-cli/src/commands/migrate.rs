//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use notehub_core::config::DatabaseBackend;
use notehub_core::error::AppError;
use notehub_database::DatabasePool;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    if config.database.backend != DatabaseBackend::Postgres {
        return Err(AppError::configuration(
            "Migrations require database.backend = \"postgres\"",
        ));
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            let applied = pool.migrate().await;
            pool.close().await;
            match applied?.as_slice() {
                [] => output::print_success("Schema is already up to date."),
                versions => {
                    for version in versions {
                        println!("  applied {version}");
                    }
                    output::print_success(&format!("Applied {} migration(s).", versions.len()));
                }
            }
        }
    }

    Ok(())
}
