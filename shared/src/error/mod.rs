//! Error catalog shared by the workspace
//!
//! - [`ErrorCode`]: standardized error codes
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`ProblemDetails`]: error body returned by the hotel API
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode, ProblemDetails};
//!
//! let body: ProblemDetails =
//!     serde_json::from_str(r#"{"detail":"Outlet 9 not found","code":3102}"#).unwrap();
//! assert_eq!(body.display_message(), Some("Outlet 9 not found"));
//! assert_eq!(ErrorCode::OutletNotFound.category(), ErrorCategory::Outlet);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::ProblemDetails;
