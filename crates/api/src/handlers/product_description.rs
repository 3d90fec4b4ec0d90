//! Handlers for the `product_description` table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog_core::types::DbId;
use catalog_core::validation::{require_id, require_text};
use catalog_db::models::product_description::{
    CreateProductDescription, UpdateProductDescription,
};
use catalog_db::repositories::ProductDescriptionRepo;
use serde::Deserialize;

use crate::error::{AppResult, OrFail};
use crate::extract::{text_of, FieldValue, JsonOrForm};
use crate::state::AppState;

const REQUIRED: &str = "Description ID, product ID, feature, and price are required.";
const UPDATE_REQUIRED: &str = "Feature and price are required.";

/// Request body for POST /product-description.
#[derive(Debug, Deserialize)]
pub struct ProductDescriptionRequest {
    pub description_id: Option<FieldValue>,
    pub product_id: Option<FieldValue>,
    pub feature: Option<FieldValue>,
    pub price: Option<FieldValue>,
}

/// Request body for PATCH /updateProductDescription/{product_id}.
#[derive(Debug, Deserialize)]
pub struct ProductDescriptionUpdateRequest {
    pub feature: Option<FieldValue>,
    pub price: Option<FieldValue>,
}

/// POST /product-description
pub async fn create(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<ProductDescriptionRequest>,
) -> AppResult<(StatusCode, &'static str)> {
    let input = CreateProductDescription {
        description_id: require_id(text_of(body.description_id).as_deref(), REQUIRED)?,
        product_id: require_id(text_of(body.product_id).as_deref(), REQUIRED)?,
        feature: require_text(text_of(body.feature), REQUIRED)?,
        price: require_text(text_of(body.price), REQUIRED)?,
    };

    let description = ProductDescriptionRepo::create(&state.pool, &input)
        .await
        .or_fail("Failed to insert product description")?;

    tracing::info!(
        description_id = description.description_id,
        product_id = description.product_id,
        "Product description inserted"
    );
    Ok((StatusCode::CREATED, "Product description inserted successfully"))
}

/// PATCH /updateProductDescription/{product_id}
///
/// Overwrites `feature` and `price` on every description of the product.
/// Both fields are required because neither column accepts NULL.
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    JsonOrForm(body): JsonOrForm<ProductDescriptionUpdateRequest>,
) -> AppResult<&'static str> {
    let input = UpdateProductDescription {
        feature: require_text(text_of(body.feature), UPDATE_REQUIRED)?,
        price: require_text(text_of(body.price), UPDATE_REQUIRED)?,
    };

    let rows_affected = ProductDescriptionRepo::update_for_product(&state.pool, product_id, &input)
        .await
        .or_fail("Failed to update product description")?;

    tracing::info!(product_id, rows_affected, "Product description updated");
    Ok("Product description updated successfully")
}
