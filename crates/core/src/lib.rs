//! Domain building blocks for the product catalog service.
//!
//! Everything here is pure: no database access and no filesystem I/O.

pub mod error;
pub mod patch;
pub mod types;
pub mod upload;
pub mod validation;
