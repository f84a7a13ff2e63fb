//! Wire DTOs of the hotel-management REST API
//!
//! These mirror the JSON the server speaks (camelCase, `...ID` suffixes,
//! money as JSON numbers). UI code never touches them directly; every DTO
//! has a `From` mapping into its counterpart in [`crate::models`].

pub mod category;
pub mod item;
pub mod pos_center;
pub mod table;
pub mod tax;
pub mod transaction;

pub use category::*;
pub use item::*;
pub use pos_center::*;
pub use table::*;
pub use tax::*;
pub use transaction::*;
