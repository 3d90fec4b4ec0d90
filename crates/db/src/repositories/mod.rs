//! Repositories: one zero-sized struct per table with async associated
//! functions taking the pool.

pub mod brief_description_repo;
pub mod product_description_repo;
pub mod product_details_repo;
pub mod product_repo;
pub mod schema_repo;

mod patch_query;

pub use brief_description_repo::BriefDescriptionRepo;
pub use product_description_repo::ProductDescriptionRepo;
pub use product_details_repo::ProductDetailsRepo;
pub use product_repo::{CascadeDelete, ProductRepo};
pub use schema_repo::{DatabaseCreation, SchemaRepo};
