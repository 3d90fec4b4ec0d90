//! Handlers for the `products` table: insert, partial update, cascade delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog_core::error::CoreError;
use catalog_core::patch::ProductColumn;
use catalog_core::types::DbId;
use catalog_core::validation::{require_id, require_text};
use catalog_db::models::product::CreateProduct;
use catalog_db::repositories::ProductRepo;

use crate::error::{AppResult, OrFail};
use crate::extract::MultipartForm;
use crate::handlers::patch_from_form;
use crate::state::AppState;

const REQUIRED: &str = "product id, name and main image are required";

/// POST /product
///
/// Multipart form with `product_id`, `name` and a `main_image` file. The
/// image is stored only after every field has been validated.
pub async fn create(
    State(state): State<AppState>,
    mut form: MultipartForm,
) -> AppResult<(StatusCode, &'static str)> {
    let product_id = require_id(form.text("product_id"), REQUIRED)?;
    let name = require_text(form.take_text("name"), REQUIRED)?;
    let image = form
        .take_file("main_image")
        .ok_or_else(|| CoreError::Validation(REQUIRED.into()))?;

    let stored = state
        .uploads
        .save(&image)
        .await
        .or_fail("Failed to insert product")?;

    let input = CreateProduct {
        product_id,
        name,
        main_image_url: stored.url.clone(),
    };
    let result = ProductRepo::create(&state.pool, &input).await;
    let product = state
        .uploads
        .discard_on_error(std::slice::from_ref(&stored), result)
        .await
        .or_fail("Failed to insert product")?;

    tracing::info!(
        product_id = product.product_id,
        main_image_url = %product.main_image_url,
        "Product inserted"
    );
    Ok((StatusCode::OK, "Product Inserted"))
}

/// PATCH /updateProduct/{product_id}
///
/// Multipart form with an optional `name` and an optional `main_image`, or
/// a JSON / URL-encoded body carrying `name`. With neither present (including
/// an empty body) the request succeeds without touching the database.
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    form: MultipartForm,
) -> AppResult<&'static str> {
    let (patch, stored) = patch_from_form::<ProductColumn>(form, &state.uploads)
        .await
        .or_fail("Failed to update product")?;

    if patch.is_empty() {
        tracing::debug!(product_id, "Product update without changes");
        return Ok("No product fields to update");
    }

    let result = ProductRepo::update(&state.pool, product_id, &patch).await;
    let rows_affected = state
        .uploads
        .discard_on_error(&stored, result)
        .await
        .or_fail("Failed to update product")?;
    if rows_affected == 0 {
        // No row references the new images.
        state.uploads.discard(&stored).await;
    }

    tracing::info!(
        product_id,
        rows_affected,
        columns = ?patch.column_names(),
        "Product updated"
    );
    Ok("Product updated successfully")
}

/// DELETE /deleteProduct/{product_id}
///
/// Removes description rows, brief description rows and the product in one
/// transaction. Deleting an unknown id succeeds.
pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<&'static str> {
    let deleted = ProductRepo::delete_with_descriptions(&state.pool, product_id)
        .await
        .or_fail("Failed to delete product")?;

    tracing::info!(
        product_id,
        descriptions = deleted.descriptions,
        brief_descriptions = deleted.brief_descriptions,
        products = deleted.products,
        "Product deleted"
    );
    Ok("Product deleted successfully")
}
