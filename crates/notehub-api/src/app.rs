//! Application builder: wires stores, state, and router into a running server.

use notehub_core::config::AppConfig;
use notehub_core::error::AppError;
use notehub_database::Stores;

use crate::router::build_router;
use crate::state::AppState;

/// Connects the configured stores and builds the shared state.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let stores = Stores::connect(&config.database).await?;
    AppState::new(config, stores)
}

/// Runs the NoteHub server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting NoteHub server...");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config).await?;
    let pool = state.stores.pool.clone();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "NoteHub server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("NoteHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
