//! Brief description model and DTOs.

use catalog_core::patch::{BriefDescriptionColumn, Patch};
use catalog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `brief_description` table. Image columns hold upload
/// URL paths.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BriefDescription {
    pub brief_description_id: DbId,
    pub product_id: DbId,
    pub brief_description_title: String,
    pub brief_description: String,
    pub sub_brief_description_one: String,
    pub sub_brief_description_two: String,
    pub desc_main_image: String,
    pub desc_sub_image_one: String,
    pub desc_sub_image_two: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBriefDescription {
    pub brief_description_id: DbId,
    pub product_id: DbId,
    pub brief_description_title: String,
    pub brief_description: String,
    pub sub_brief_description_one: String,
    pub sub_brief_description_two: String,
    pub desc_main_image: String,
    pub desc_sub_image_one: String,
    pub desc_sub_image_two: String,
}

/// Sparse update over the text and image columns.
pub type BriefDescriptionPatch = Patch<BriefDescriptionColumn>;
