pub mod catalog;
pub mod health;
pub mod schema;

use axum::Router;

use crate::state::AppState;

/// Build the catalog route tree.
///
/// Paths are mounted at the root, matching the public contract:
///
/// ```text
/// /connect                                   connectivity check
/// /create-database/{name}                    DDL: database
/// /create-products-table                     DDL: products
/// /create-product-description-table          DDL: product_description
/// /create-brief-description-table            DDL: brief_description
///
/// /product                                   insert product (multipart)
/// /product-description                       insert description (JSON / form)
/// /brief-description                         insert brief description (multipart)
/// /products-details                          joined list
/// /product-details/{product_id}              joined rows for one product
/// /updateProduct/{product_id}                partial update (multipart)
/// /updateProductDescription/{product_id}     overwrite feature + price
/// /updateBriefDescription/{product_id}       partial update (multipart)
/// /deleteProduct/{product_id}                transactional cascade delete
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .merge(schema::router())
        .merge(catalog::router())
}
