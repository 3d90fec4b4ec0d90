//! Product entity model and DTOs.

use catalog_core::patch::{Patch, ProductColumn};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub product_id: DbId,
    pub name: String,
    pub main_image_url: String,
}

/// DTO for inserting a product. The id is supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub product_id: DbId,
    pub name: String,
    pub main_image_url: String,
}

/// Sparse update over `name` and `main_image_url`.
pub type ProductPatch = Patch<ProductColumn>;
