//! `UPDATE … SET` construction from a sparse patch.

use catalog_core::patch::{Patch, PatchColumn};
use catalog_core::types::DbId;
use sqlx::{Postgres, QueryBuilder};

/// Build `UPDATE <table> SET col = $1, … WHERE product_id = $n`.
///
/// Column names come from the allowlist enum; every value is bound. The
/// patch must not be empty.
pub(crate) fn update_by_product<'a, C: PatchColumn>(
    patch: &'a Patch<C>,
    product_id: DbId,
) -> QueryBuilder<'a, Postgres> {
    debug_assert!(!patch.is_empty(), "empty patch reached the query builder");

    let mut qb = QueryBuilder::new(format!("UPDATE {} SET ", C::TABLE));
    let mut assignments = qb.separated(", ");
    for (column, value) in patch.iter() {
        assignments.push(column.column_name());
        assignments.push_unseparated(" = ");
        assignments.push_bind_unseparated(value);
    }
    qb.push(" WHERE product_id = ");
    qb.push_bind(product_id);
    qb
}
