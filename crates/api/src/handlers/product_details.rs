//! Handlers for the joined product detail reads.

use axum::extract::{Path, State};
use axum::Json;
use catalog_core::error::CoreError;
use catalog_core::types::DbId;
use catalog_db::models::product_details::ProductDetailRow;
use catalog_db::repositories::ProductDetailsRepo;

use crate::error::{AppError, AppResult, OrFail};
use crate::state::AppState;

/// GET /products-details
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProductDetailRow>>> {
    let rows = ProductDetailsRepo::list_all(&state.pool)
        .await
        .or_fail("Failed to retrieve products with details")?;
    Ok(Json(rows))
}

/// GET /product-details/{product_id}
///
/// Returns every joined row for the product; 404 when there are none.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<Vec<ProductDetailRow>>> {
    let rows = ProductDetailsRepo::list_by_product(&state.pool, product_id)
        .await
        .or_fail("Failed to retrieve product details")?;

    if rows.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }));
    }
    Ok(Json(rows))
}
