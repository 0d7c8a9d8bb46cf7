//! The PostgreSQL pool behind the repository stores.
//!
//! [`DatabasePool`] owns everything that only makes sense for the
//! PostgreSQL backend: the sqlx pool, the embedded schema migrations, and
//! the readiness check used by `/api/health`.

use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, warn};

use notehub_core::config::DatabaseConfig;
use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Shared handle to the NoteHub PostgreSQL database.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Connect without touching the schema.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        info!(
            url = %config.redacted_url(),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect(&config.url)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        Ok(Self { pool })
    }

    /// Connect and, when `database.run_migrations` is set, bring the
    /// schema up to date.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = Self::connect(config).await?;
        if config.run_migrations {
            pool.migrate().await?;
        }
        Ok(pool)
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply pending migrations and return the versions that were applied,
    /// oldest first.
    pub async fn migrate(&self) -> AppResult<Vec<i64>> {
        let before = self.applied_versions().await?;

        MIGRATOR.run(&self.pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

        let applied: Vec<i64> = MIGRATOR
            .iter()
            .filter(|m| !m.migration_type.is_down_migration())
            .map(|m| m.version)
            .filter(|v| !before.contains(v))
            .collect();

        if applied.is_empty() {
            info!("Schema is up to date");
        } else {
            info!(versions = ?applied, "Applied migrations");
        }
        Ok(applied)
    }

    /// Whether the database answers and holds the notes schema.
    ///
    /// Failures are logged and reported as not ready.
    pub async fn is_ready(&self) -> bool {
        match sqlx::query_scalar::<_, bool>("SELECT to_regclass('notes') IS NOT NULL")
            .fetch_one(&self.pool)
            .await
        {
            Ok(true) => true,
            Ok(false) => {
                warn!("Database reachable but the notes table is missing");
                false
            }
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                false
            }
        }
    }

    /// Close all connections.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }

    async fn applied_versions(&self) -> AppResult<Vec<i64>> {
        let map_err = |e: sqlx::Error| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to read migration history: {e}"),
                e,
            )
        };

        let tracked: bool =
            sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
                .fetch_one(&self.pool)
                .await
                .map_err(map_err)?;
        if !tracked {
            return Ok(Vec::new());
        }

        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success ORDER BY version")
            .fetch_all(&self.pool)
            .await
            .map_err(map_err)
    }
}
