pub mod brief_description;
pub mod product;
pub mod product_description;
pub mod product_details;
