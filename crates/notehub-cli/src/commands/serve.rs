//! Run the HTTP server from the CLI.

use notehub_core::error::AppError;

/// Execute the serve command
pub async fn execute(env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    notehub_api::run_server(config).await
}
