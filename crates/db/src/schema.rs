//! Fixed table definitions provisioned by [`crate::repositories::SchemaRepo`].
//!
//! The catalog has no migration history: each table is created once with
//! `CREATE TABLE IF NOT EXISTS` and never altered.

pub const PRODUCTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS products (
    product_id INTEGER PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    main_image_url VARCHAR(255) NOT NULL
)";

pub const PRODUCT_DESCRIPTION_TABLE: &str = "
CREATE TABLE IF NOT EXISTS product_description (
    description_id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL,
    feature VARCHAR(255) NOT NULL,
    price VARCHAR(255) NOT NULL,
    FOREIGN KEY (product_id) REFERENCES products(product_id)
)";

pub const BRIEF_DESCRIPTION_TABLE: &str = "
CREATE TABLE IF NOT EXISTS brief_description (
    brief_description_id INTEGER PRIMARY KEY,
    product_id INTEGER NOT NULL,
    brief_description_title TEXT NOT NULL,
    brief_description TEXT NOT NULL,
    sub_brief_description_one TEXT NOT NULL,
    sub_brief_description_two TEXT NOT NULL,
    desc_main_image VARCHAR(255) NOT NULL,
    desc_sub_image_one VARCHAR(255) NOT NULL,
    desc_sub_image_two VARCHAR(255) NOT NULL,
    FOREIGN KEY (product_id) REFERENCES products(product_id)
)";

/// All tables in dependency order (referenced tables first).
pub const ALL_TABLES: [(&str, &str); 3] = [
    ("products", PRODUCTS_TABLE),
    ("product_description", PRODUCT_DESCRIPTION_TABLE),
    ("brief_description", BRIEF_DESCRIPTION_TABLE),
];
