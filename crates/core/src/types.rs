/// Catalog primary keys are caller-supplied PostgreSQL `INTEGER` values.
pub type DbId = i32;
