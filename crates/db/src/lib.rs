//! Persistence layer for the `projects` table.
//!
//! Owns pool creation, migrations, the [`store::ProjectStore`] gateway and
//! the classification of storage failures in [`error`].

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::DbConfig;
pub use error::StoreError;
pub use store::ProjectStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options()?)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
