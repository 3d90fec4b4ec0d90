//! Repository for the `products` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, ProductPatch};
use crate::repositories::patch_query;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "product_id, name, main_image_url";

/// Rows removed by [`ProductRepo::delete_with_descriptions`], per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeDelete {
    pub descriptions: u64,
    pub brief_descriptions: u64,
    pub products: u64,
}

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (product_id, name, main_image_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.product_id)
            .bind(&input.name)
            .bind(&input.main_image_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE product_id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY product_id");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Apply a sparse patch. Returns the number of rows updated.
    ///
    /// An empty patch touches nothing and returns `0`.
    pub async fn update(
        pool: &PgPool,
        product_id: DbId,
        patch: &ProductPatch,
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

    /// Delete a product together with its description and brief description
    /// rows, dependents first, in one transaction.
    ///
    /// Deleting an id that does not exist succeeds with all counts at zero.
    pub async fn delete_with_descriptions(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<CascadeDelete, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let descriptions = sqlx::query("DELETE FROM product_description WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let brief_descriptions = sqlx::query("DELETE FROM brief_description WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let products = sqlx::query("DELETE FROM products WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        Ok(CascadeDelete {
            descriptions,
            brief_descriptions,
            products,
        })
    }
}
