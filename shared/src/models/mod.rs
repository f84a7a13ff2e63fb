//! UI-facing data models
//!
//! Normalized shapes the POS flow works with. Each is built from its wire
//! DTO in [`crate::dto`] through a `From` impl; field names here are the
//! ones the rest of the workspace uses.
//! All remote ids are `i64`, all money is [`rust_decimal::Decimal`].

pub mod category;
pub mod dining_table;
pub mod outlet;
pub mod product;
pub mod tax;

// Re-exports
pub use category::*;
pub use dining_table::*;
pub use outlet::*;
pub use product::*;
pub use tax::*;
