//! Joined product detail reads.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_details::ProductDetailRow;

const SELECT_DETAILS: &str = "
    SELECT
        p.product_id,
        p.name AS product_name,
        p.main_image_url,
        pd.description_id,
        pd.feature,
        pd.price,
        bd.brief_description_id,
        bd.brief_description_title,
        bd.brief_description,
        bd.sub_brief_description_one,
        bd.sub_brief_description_two,
        bd.desc_main_image AS brief_desc_main_image,
        bd.desc_sub_image_one AS brief_desc_sub_image_one,
        bd.desc_sub_image_two AS brief_desc_sub_image_two
    FROM products p
    LEFT JOIN product_description pd ON p.product_id = pd.product_id
    LEFT JOIN brief_description bd ON p.product_id = bd.product_id";

const ORDER_BY: &str = "ORDER BY p.product_id, pd.description_id, bd.brief_description_id";

pub struct ProductDetailsRepo;

impl ProductDetailsRepo {
    /// Every product with its joined description rows.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ProductDetailRow>, sqlx::Error> {
        let query = format!("{SELECT_DETAILS} {ORDER_BY}");
        sqlx::query_as::<_, ProductDetailRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Joined rows for one product. Empty when the product does not exist.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductDetailRow>, sqlx::Error> {
        let query = format!("{SELECT_DETAILS} WHERE p.product_id = $1 {ORDER_BY}");
        sqlx::query_as::<_, ProductDetailRow>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
