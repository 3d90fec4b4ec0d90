//! Database access for the product catalog: pool construction, schema
//! provisioning, models and repositories.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Acquire one pooled connection and hand it straight back.
///
/// The connection returns to the pool when the guard drops, on every path.
pub async fn check_connection(pool: &DbPool) -> Result<(), sqlx::Error> {
    let conn = pool.acquire().await?;
    tracing::debug!("Acquired pooled connection");
    drop(conn);
    Ok(())
}
