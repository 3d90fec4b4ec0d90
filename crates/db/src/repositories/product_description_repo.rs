//! Repository for the `product_description` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_description::{
    CreateProductDescription, ProductDescription, UpdateProductDescription,
};

const COLUMNS: &str = "description_id, product_id, feature, price";

pub struct ProductDescriptionRepo;

impl ProductDescriptionRepo {
    /// Insert a description row. The referenced product is not pre-checked;
    /// a missing product surfaces as a foreign key violation.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductDescription,
    ) -> Result<ProductDescription, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_description (description_id, product_id, feature, price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductDescription>(&query)
            .bind(input.description_id)
            .bind(input.product_id)
            .bind(&input.feature)
            .bind(&input.price)
            .fetch_one(pool)
            .await
    }

    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductDescription>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_description
             WHERE product_id = $1
             ORDER BY description_id"
        );
        sqlx::query_as::<_, ProductDescription>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite `feature` and `price` on every description of a product.
    /// Returns the number of rows updated.
    pub async fn update_for_product(
        pool: &PgPool,
        product_id: DbId,
        input: &UpdateProductDescription,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE product_description SET feature = $1, price = $2 WHERE product_id = $3",
        )
        .bind(&input.feature)
        .bind(&input.price)
        .bind(product_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
