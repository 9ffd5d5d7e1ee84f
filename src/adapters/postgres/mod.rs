//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - Class session persistence
//! - `run_migrations` - Applies the embedded schema migrations

mod session_repository;

pub use session_repository::PostgresSessionRepository;

use sqlx::PgPool;

/// Applies pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await
}
