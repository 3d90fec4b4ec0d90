//! Route definitions for catalog records.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::{brief_description, product, product_description, product_details};
use crate::state::AppState;

/// ```text
/// POST   /product                                  -> product::create
/// POST   /product-description                      -> product_description::create
/// POST   /brief-description                        -> brief_description::create
/// GET    /products-details                         -> product_details::list
/// GET    /product-details/{product_id}             -> product_details::get_by_id
/// PATCH  /updateProduct/{product_id}               -> product::update
/// PATCH  /updateProductDescription/{product_id}    -> product_description::update
/// PATCH  /updateBriefDescription/{product_id}      -> brief_description::update
/// DELETE /deleteProduct/{product_id}               -> product::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/product", post(product::create))
        .route("/product-description", post(product_description::create))
        .route("/brief-description", post(brief_description::create))
        .route("/products-details", get(product_details::list))
        .route("/product-details/{product_id}", get(product_details::get_by_id))
        .route("/updateProduct/{product_id}", patch(product::update))
        .route(
            "/updateProductDescription/{product_id}",
            patch(product_description::update),
        )
        .route(
            "/updateBriefDescription/{product_id}",
            patch(brief_description::update),
        )
        .route("/deleteProduct/{product_id}", delete(product::delete))
}
