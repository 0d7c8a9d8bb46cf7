//! Identity token tools for debugging clients.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use notehub_auth::jwt::TokenCodec;
use notehub_core::error::AppError;
use notehub_core::types::UserId;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue a token for an existing user id
    Issue {
        /// User id to embed as the subject
        #[arg(long)]
        user_id: i64,
        /// Email to embed
        #[arg(long)]
        email: String,
    },
    /// Verify a token against the configured secret
    Verify {
        /// The token to check
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct TokenReport {
    user_id: String,
    email: String,
    issued_at: Option<String>,
    expires_at: Option<String>,
}

/// Execute token commands
pub fn execute(args: &TokenArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let codec = TokenCodec::new(&config.auth)?;

    match &args.command {
        TokenCommand::Issue { user_id, email } => {
            let issued = codec.issue(UserId(*user_id), email)?;
            println!("{}", issued.token);
            output::print_success(&format!("Expires at {}", issued.expires_at.to_rfc3339()));
        }
        TokenCommand::Verify { token } => {
            let claims = codec
                .verify(token)
                .ok_or_else(|| AppError::unauthenticated("Token is invalid or expired"))?;
            let report = TokenReport {
                user_id: claims.sub.clone(),
                email: claims.email.clone(),
                issued_at: chrono::DateTime::from_timestamp(claims.iat, 0).map(|t| t.to_rfc3339()),
                expires_at: claims.expires_at().map(|t| t.to_rfc3339()),
            };
            output::print_item(&report, format);
        }
    }

    Ok(())
}
