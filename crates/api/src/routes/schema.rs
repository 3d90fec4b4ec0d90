//! Route definitions for connectivity and schema provisioning.

use axum::routing::get;
use axum::Router;

use crate::handlers::schema;
use crate::state::AppState;

/// ```text
/// GET /connect                            -> connect
/// GET /create-database/{name}             -> create_database
/// GET /create-products-table              -> create_products_table
/// GET /create-product-description-table   -> create_product_description_table
/// GET /create-brief-description-table     -> create_brief_description_table
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/connect", get(schema::connect))
        .route("/create-database/{name}", get(schema::create_database))
        .route("/create-products-table", get(schema::create_products_table))
        .route(
            "/create-product-description-table",
            get(schema::create_product_description_table),
        )
        .route(
            "/create-brief-description-table",
            get(schema::create_brief_description_table),
        )
}
