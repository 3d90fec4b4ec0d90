//! Handlers for connectivity checks and schema provisioning.
//!
//! Every DDL operation is idempotent; "created" and "already existed" share
//! one success message.

use axum::extract::{Path, State};
use catalog_core::validation::DatabaseName;
use catalog_db::repositories::{DatabaseCreation, SchemaRepo};

use crate::error::{AppResult, OrFail};
use crate::state::AppState;

/// GET /connect
pub async fn connect(State(state): State<AppState>) -> AppResult<&'static str> {
    catalog_db::check_connection(&state.pool)
        .await
        .or_fail("Failed to connect to the database.")?;
    tracing::info!("Database connection verified");
    Ok("Connected successfully")
}

/// GET /create-database/{name}
pub async fn create_database(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<String> {
    let name = DatabaseName::parse(&name)?;
    let outcome = SchemaRepo::create_database(&state.pool, &name)
        .await
        .or_fail(format!("Failed to create {name} database"))?;

    tracing::info!(
        database = %name,
        created = outcome == DatabaseCreation::Created,
        "Database provisioned"
    );
    Ok(format!("{name} database created or already exists"))
}

/// GET /create-products-table
pub async fn create_products_table(State(state): State<AppState>) -> AppResult<&'static str> {
    SchemaRepo::create_products_table(&state.pool)
        .await
        .or_fail("Failed to create products")?;
    tracing::info!(table = "products", "Table provisioned");
    Ok("products table created successfully or already exists")
}

/// GET /create-product-description-table
pub async fn create_product_description_table(
    State(state): State<AppState>,
) -> AppResult<&'static str> {
    SchemaRepo::create_product_description_table(&state.pool)
        .await
        .or_fail("Failed to create product description table")?;
    tracing::info!(table = "product_description", "Table provisioned");
    Ok("product description table created successfully or already exists")
}

/// GET /create-brief-description-table
pub async fn create_brief_description_table(
    State(state): State<AppState>,
) -> AppResult<&'static str> {
    SchemaRepo::create_brief_description_table(&state.pool)
        .await
        .or_fail("Failed to create brief description table")?;
    tracing::info!(table = "brief_description", "Table provisioned");
    Ok("brief description table created successfully or already exists")
}
