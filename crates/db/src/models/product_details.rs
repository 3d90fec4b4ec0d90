//! Joined read model over all three catalog tables.

use catalog_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `products LEFT JOIN product_description LEFT JOIN
/// brief_description`.
///
/// Columns from the joined tables are `None` when the product has no
/// matching row. A product with several description rows yields one
/// row per combination.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductDetailRow {
    pub product_id: DbId,
    pub product_name: String,
    pub main_image_url: String,
    pub description_id: Option<DbId>,
    pub feature: Option<String>,
    pub price: Option<String>,
    pub brief_description_id: Option<DbId>,
    pub brief_description_title: Option<String>,
    pub brief_description: Option<String>,
    pub sub_brief_description_one: Option<String>,
    pub sub_brief_description_two: Option<String>,
    pub brief_desc_main_image: Option<String>,
    pub brief_desc_sub_image_one: Option<String>,
    pub brief_desc_sub_image_two: Option<String>,
}
