//! Repository for the `brief_description` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::brief_description::{
    BriefDescription, BriefDescriptionPatch, CreateBriefDescription,
};
use crate::repositories::patch_query;

const COLUMNS: &str = "brief_description_id, product_id, brief_description_title, \
    brief_description, sub_brief_description_one, sub_brief_description_two, \
    desc_main_image, desc_sub_image_one, desc_sub_image_two";

pub struct BriefDescriptionRepo;

impl BriefDescriptionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateBriefDescription,
    ) -> Result<BriefDescription, sqlx::Error> {
        let query = format!(
            "INSERT INTO brief_description ({COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BriefDescription>(&query)
            .bind(input.brief_description_id)
            .bind(input.product_id)
            .bind(&input.brief_description_title)
            .bind(&input.brief_description)
            .bind(&input.sub_brief_description_one)
            .bind(&input.sub_brief_description_two)
            .bind(&input.desc_main_image)
            .bind(&input.desc_sub_image_one)
            .bind(&input.desc_sub_image_two)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<BriefDescription>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM brief_description
             WHERE product_id = $1
             ORDER BY brief_description_id"
        );
        sqlx::query_as::<_, BriefDescription>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a sparse patch to every brief description of a product.
    /// Returns the number of rows updated; an empty patch touches nothing.
    pub async fn update(
        pool: &PgPool,
        product_id: DbId,
        patch: &BriefDescriptionPatch,
    ) -> Result<u64, sqlx::Error> {
        if patch.is_empty() {
            return Ok(0);
        }
        let result = patch_query::update_by_product(patch, product_id)
            .build()
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
