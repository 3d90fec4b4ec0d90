//! Integration tests for the catalog repositories.
//!
//! Exercises inserts, the joined detail reads, sparse updates and the
//! transactional cascade delete against a real database.

use assert_matches::assert_matches;
use catalog_core::patch::{BriefDescriptionColumn, Patch, ProductColumn};
use catalog_db::models::brief_description::CreateBriefDescription;
use catalog_db::models::product::CreateProduct;
use catalog_db::models::product_description::{
    CreateProductDescription, UpdateProductDescription,
};
use catalog_db::repositories::{
    BriefDescriptionRepo, CascadeDelete, ProductDescriptionRepo, ProductDetailsRepo, ProductRepo,
    SchemaRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn setup(pool: &PgPool) {
    SchemaRepo::provision_all(pool).await.unwrap();
}

fn new_product(product_id: i32, name: &str) -> CreateProduct {
    CreateProduct {
        product_id,
        name: name.to_string(),
        main_image_url: format!("/uploads/main_image-{product_id}.png"),
    }
}

fn new_description(description_id: i32, product_id: i32) -> CreateProductDescription {
    CreateProductDescription {
        description_id,
        product_id,
        feature: "Waterproof".to_string(),
        price: "19.99".to_string(),
    }
}

fn new_brief(brief_description_id: i32, product_id: i32) -> CreateBriefDescription {
    CreateBriefDescription {
        brief_description_id,
        product_id,
        brief_description_title: "Title".to_string(),
        brief_description: "Body".to_string(),
        sub_brief_description_one: "Sub one".to_string(),
        sub_brief_description_two: "Sub two".to_string(),
        desc_main_image: "/uploads/desc_main_image-1.png".to_string(),
        desc_sub_image_one: "/uploads/desc_sub_image_one-1.png".to_string(),
        desc_sub_image_two: "/uploads/desc_sub_image_two-1.png".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Inserts and reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_create_and_find_product(pool: PgPool) {
    setup(&pool).await;

    let created = ProductRepo::create(&pool, &new_product(1, "Widget")).await.unwrap();
    assert_eq!(created.product_id, 1);
    assert_eq!(created.main_image_url, "/uploads/main_image-1.png");

    let found = ProductRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(found.name, "Widget");
    assert!(ProductRepo::find_by_id(&pool, 2).await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn test_list_products_ordered_by_id(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(3, "C")).await.unwrap();
    ProductRepo::create(&pool, &new_product(1, "A")).await.unwrap();

    let ids: Vec<_> = ProductRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.product_id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[sqlx::test(migrations = false)]
async fn test_duplicate_product_id_is_rejected(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Widget")).await.unwrap();

    let err = ProductRepo::create(&pool, &new_product(1, "Other")).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
}

#[sqlx::test(migrations = false)]
async fn test_description_for_missing_product_violates_fk(pool: PgPool) {
    setup(&pool).await;

    let err = ProductDescriptionRepo::create(&pool, &new_description(1, 404))
        .await
        .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(ref db) if db.is_foreign_key_violation());
}

#[sqlx::test(migrations = false)]
async fn test_details_left_join_fills_nulls(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Bare")).await.unwrap();

    let rows = ProductDetailsRepo::list_by_product(&pool, 1).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].product_name, "Bare");
    assert!(rows[0].description_id.is_none());
    assert!(rows[0].brief_desc_main_image.is_none());
}

#[sqlx::test(migrations = false)]
async fn test_details_join_returns_all_columns(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Full")).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(10, 1)).await.unwrap();
    BriefDescriptionRepo::create(&pool, &new_brief(20, 1)).await.unwrap();

    let rows = ProductDetailsRepo::list_by_product(&pool, 1).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.description_id, Some(10));
    assert_eq!(row.price.as_deref(), Some("19.99"));
    assert_eq!(row.brief_description_id, Some(20));
    assert_eq!(
        row.brief_desc_sub_image_two.as_deref(),
        Some("/uploads/desc_sub_image_two-1.png")
    );
}

#[sqlx::test(migrations = false)]
async fn test_details_duplicate_per_description_row(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Twice")).await.unwrap();
    ProductRepo::create(&pool, &new_product(2, "Once")).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(10, 1)).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(11, 1)).await.unwrap();

    let rows = ProductDetailsRepo::list_all(&pool).await.unwrap();
    let ids: Vec<(i32, Option<i32>)> = rows
        .iter()
        .map(|r| (r.product_id, r.description_id))
        .collect();
    assert_eq!(ids, vec![(1, Some(10)), (1, Some(11)), (2, None)]);
}

#[sqlx::test(migrations = false)]
async fn test_details_for_missing_product_is_empty(pool: PgPool) {
    setup(&pool).await;
    let rows = ProductDetailsRepo::list_by_product(&pool, 999).await.unwrap();
    assert!(rows.is_empty());
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_product_patch_name_only(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Old")).await.unwrap();

    let mut patch = Patch::new();
    patch.set(ProductColumn::Name, "New");
    assert_eq!(ProductRepo::update(&pool, 1, &patch).await.unwrap(), 1);

    let product = ProductRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(product.name, "New");
    assert_eq!(product.main_image_url, "/uploads/main_image-1.png");
}

#[sqlx::test(migrations = false)]
async fn test_product_patch_image_only(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Keep")).await.unwrap();

    let mut patch = Patch::new();
    patch.set(ProductColumn::MainImageUrl, "/uploads/main_image-2.jpg");
    ProductRepo::update(&pool, 1, &patch).await.unwrap();

    let product = ProductRepo::find_by_id(&pool, 1).await.unwrap().unwrap();
    assert_eq!(product.name, "Keep");
    assert_eq!(product.main_image_url, "/uploads/main_image-2.jpg");
}

#[sqlx::test(migrations = false)]
async fn test_empty_patch_touches_nothing(pool: PgPool) {
    // No tables provisioned: an empty patch must not reach the database.
    let patch = Patch::new();
    assert_eq!(ProductRepo::update(&pool, 1, &patch).await.unwrap(), 0);
    let patch = Patch::new();
    assert_eq!(BriefDescriptionRepo::update(&pool, 1, &patch).await.unwrap(), 0);
}

#[sqlx::test(migrations = false)]
async fn test_brief_patch_updates_only_present_columns(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "P")).await.unwrap();
    BriefDescriptionRepo::create(&pool, &new_brief(20, 1)).await.unwrap();

    let mut patch = Patch::new();
    patch.set(BriefDescriptionColumn::Title, "New title");
    patch.set(BriefDescriptionColumn::SubTwo, "");
    patch.set(BriefDescriptionColumn::SubImageOne, "/uploads/desc_sub_image_one-2.png");
    assert_eq!(BriefDescriptionRepo::update(&pool, 1, &patch).await.unwrap(), 1);

    let brief = BriefDescriptionRepo::list_by_product(&pool, 1).await.unwrap().remove(0);
    assert_eq!(brief.brief_description_title, "New title");
    assert_eq!(brief.brief_description, "Body");
    assert_eq!(brief.sub_brief_description_one, "Sub one");
    assert_eq!(brief.sub_brief_description_two, "");
    assert_eq!(brief.desc_main_image, "/uploads/desc_main_image-1.png");
    assert_eq!(brief.desc_sub_image_one, "/uploads/desc_sub_image_one-2.png");
}

#[sqlx::test(migrations = false)]
async fn test_description_overwrite(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "P")).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(10, 1)).await.unwrap();

    let input = UpdateProductDescription {
        feature: "Shockproof".to_string(),
        price: "24.50".to_string(),
    };
    assert_eq!(
        ProductDescriptionRepo::update_for_product(&pool, 1, &input).await.unwrap(),
        1
    );

    let rows = ProductDescriptionRepo::list_by_product(&pool, 1).await.unwrap();
    assert_eq!(rows[0].feature, "Shockproof");
    assert_eq!(rows[0].price, "24.50");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_delete_removes_dependents_and_product(pool: PgPool) {
    setup(&pool).await;
    ProductRepo::create(&pool, &new_product(1, "Gone")).await.unwrap();
    ProductRepo::create(&pool, &new_product(2, "Stays")).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(10, 1)).await.unwrap();
    BriefDescriptionRepo::create(&pool, &new_brief(20, 1)).await.unwrap();
    BriefDescriptionRepo::create(&pool, &new_brief(21, 2)).await.unwrap();

    let deleted = ProductRepo::delete_with_descriptions(&pool, 1).await.unwrap();
    assert_eq!(
        deleted,
        CascadeDelete {
            descriptions: 1,
            brief_descriptions: 1,
            products: 1,
        }
    );

    assert!(ProductRepo::find_by_id(&pool, 1).await.unwrap().is_none());
    assert!(ProductDescriptionRepo::list_by_product(&pool, 1).await.unwrap().is_empty());
    assert!(BriefDescriptionRepo::list_by_product(&pool, 1).await.unwrap().is_empty());

    assert!(ProductRepo::find_by_id(&pool, 2).await.unwrap().is_some());
    assert_eq!(BriefDescriptionRepo::list_by_product(&pool, 2).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
async fn test_delete_missing_product_succeeds(pool: PgPool) {
    setup(&pool).await;
    let deleted = ProductRepo::delete_with_descriptions(&pool, 42).await.unwrap();
    assert_eq!(deleted, CascadeDelete::default());
}

#[sqlx::test(migrations = false)]
async fn test_failed_delete_rolls_back(pool: PgPool) {
    // Only products + product_description exist, so the brief_description
    // delete fails mid-transaction.
    SchemaRepo::create_products_table(&pool).await.unwrap();
    SchemaRepo::create_product_description_table(&pool).await.unwrap();
    ProductRepo::create(&pool, &new_product(1, "P")).await.unwrap();
    ProductDescriptionRepo::create(&pool, &new_description(10, 1)).await.unwrap();

    assert!(ProductRepo::delete_with_descriptions(&pool, 1).await.is_err());

    assert_eq!(ProductDescriptionRepo::list_by_product(&pool, 1).await.unwrap().len(), 1);
    assert!(ProductRepo::find_by_id(&pool, 1).await.unwrap().is_some());
}
