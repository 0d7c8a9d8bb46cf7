//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use notehub_core::config::AppConfig;
use notehub_core::error::AppError;

/// NoteHub: multi-tenant note backend
#[derive(Debug, Parser)]
#[command(name = "notehub", version, about, long_about = None)]
pub struct Cli {
    /// Environment overlay to load (`config/{env}.toml`)
    #[arg(short, long, env = "NOTEHUB_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the NoteHub server
    Serve,
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Identity token tools
    Token(token::TokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve => serve::execute(&self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Token(args) => token::execute(args, &self.env, self.format),
            Commands::Config(args) => config::execute(args, &self.env, self.format),
        }
    }
}

/// Helper: load and validate configuration for the environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}
