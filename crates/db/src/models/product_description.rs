//! Product description (feature / price) model and DTOs.

use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_description` table.
///
/// `price` is free text, not a numeric column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductDescription {
    pub description_id: DbId,
    pub product_id: DbId,
    pub feature: String,
    pub price: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductDescription {
    pub description_id: DbId,
    pub product_id: DbId,
    pub feature: String,
    pub price: String,
}

/// Full overwrite of the mutable columns. Both are required.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductDescription {
    pub feature: String,
    pub price: String,
}
