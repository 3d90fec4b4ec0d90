//! Schema provisioning: database and table creation.

use catalog_core::validation::DatabaseName;
use sqlx::PgPool;

use crate::schema::{
    ALL_TABLES, BRIEF_DESCRIPTION_TABLE, PRODUCTS_TABLE, PRODUCT_DESCRIPTION_TABLE,
};

/// PostgreSQL `duplicate_database` SQLSTATE.
const DUPLICATE_DATABASE: &str = "42P04";

/// Outcome of [`SchemaRepo::create_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseCreation {
    Created,
    AlreadyExists,
}

/// Idempotent DDL operations.
pub struct SchemaRepo;

impl SchemaRepo {
    /// Create a database unless one with the same name exists.
    ///
    /// A concurrent creation racing this one is reported as
    /// [`DatabaseCreation::AlreadyExists`].
    pub async fn create_database(
        pool: &PgPool,
        name: &DatabaseName,
    ) -> Result<DatabaseCreation, sqlx::Error> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(name.as_str())
                .fetch_one(pool)
                .await?;
        if exists.0 {
            return Ok(DatabaseCreation::AlreadyExists);
        }

        // CREATE DATABASE cannot run inside a transaction block or take a
        // bound parameter for the name.
        let ddl = format!("CREATE DATABASE {}", name.quoted());
        match sqlx::raw_sql(&ddl).execute(pool).await {
            Ok(_) => Ok(DatabaseCreation::Created),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(DUPLICATE_DATABASE) =>
            {
                Ok(DatabaseCreation::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn create_products_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(PRODUCTS_TABLE).execute(pool).await?;
        Ok(())
    }

    pub async fn create_product_description_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(PRODUCT_DESCRIPTION_TABLE).execute(pool).await?;
        Ok(())
    }

    pub async fn create_brief_description_table(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(BRIEF_DESCRIPTION_TABLE).execute(pool).await?;
        Ok(())
    }

    /// Create all three tables in one transaction, products first.
    pub async fn provision_all(pool: &PgPool) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (table, ddl) in ALL_TABLES {
            sqlx::query(ddl).execute(&mut *tx).await?;
            tracing::debug!(table, "Table provisioned");
        }

        tx.commit().await?;
        Ok(())
    }

    /// Whether a table exists in the current schema search path.
    pub async fn table_exists(pool: &PgPool, table: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT to_regclass($1) IS NOT NULL")
            .bind(table)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
