//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use foldertree_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every namespace table and re-apply all migrations.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    warn!("Dropping namespace tables");

    sqlx::raw_sql(
        "DROP TABLE IF EXISTS files CASCADE; \
         DROP TABLE IF EXISTS folders CASCADE; \
         DROP TABLE IF EXISTS _sqlx_migrations; \
         DROP FUNCTION IF EXISTS set_updated_at() CASCADE;",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::StoreUnavailable, "Failed to drop tables", e))?;

    run_migrations(pool).await
}
