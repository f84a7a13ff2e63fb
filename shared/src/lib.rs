//! Shared types for the hotel POS workspace
//!
//! Wire DTOs of the hotel-management API, the normalized models the POS
//! flow works with, and the unified error system.

pub mod dto;
pub mod error;
pub mod models;

// Re-exports
pub use error::{ErrorCategory, ErrorCode, ProblemDetails};
pub use serde::{Deserialize, Serialize};
