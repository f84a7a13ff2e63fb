//! Error types of the POS flow

use std::error::Error as StdError;

use hotel_client::ClientError;
use hotel_printer::PrintError;
use shared::ErrorCode;
use thiserror::Error;

/// Persisted context could not be read or written
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Context file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Context file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

impl ContextError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::InternalError,
            Self::Corrupted(_) => ErrorCode::StorageCorrupted,
        }
    }
}

/// Order building, outlet/table staging and submission errors
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("No hotel property selected")]
    PropertyNotSelected,

    #[error("No outlet selected")]
    OutletNotSelected,

    #[error("Outlet {0} not found")]
    OutletNotFound(i64),

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Table {0} not found")]
    TableNotFound(String),

    /// Cart lines were added under a different outlet
    #[error("Cart holds items of outlet {cart} but outlet {selected} is selected")]
    OutletMismatch { cart: i64, selected: i64 },

    #[error("An order is already being submitted")]
    AlreadySubmitting,

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl OrderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyCart => ErrorCode::OrderEmpty,
            Self::PropertyNotSelected => ErrorCode::PropertyNotSelected,
            Self::OutletNotSelected => ErrorCode::OutletNotSelected,
            Self::OutletNotFound(_) => ErrorCode::OutletNotFound,
            Self::ProductNotFound(_) => ErrorCode::ProductNotFound,
            Self::TableNotFound(_) => ErrorCode::TableNotFound,
            Self::OutletMismatch { .. } => ErrorCode::ValidationFailed,
            Self::AlreadySubmitting => ErrorCode::OrderAlreadySubmitting,
            Self::Client(_) => ErrorCode::OrderSubmitFailed,
        }
    }
}

/// Bulk item import errors
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Nothing to import")]
    Empty,

    #[error("No hotel property selected")]
    PropertyNotSelected,

    /// Row numbers are 1-based, as the user sees them
    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ImportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Empty => ErrorCode::ImportEmpty,
            Self::PropertyNotSelected => ErrorCode::PropertyNotSelected,
            Self::InvalidRow { .. } => ErrorCode::ValidationFailed,
            Self::Client(e) => e.error_code(),
        }
    }
}

/// Code of the first error in a source chain that the POS knows about
pub fn error_code_of(err: &(dyn StdError + 'static)) -> Option<ErrorCode> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(e) = e.downcast_ref::<OrderError>() {
            return Some(e.code());
        }
        if let Some(e) = e.downcast_ref::<ImportError>() {
            return Some(e.code());
        }
        if let Some(e) = e.downcast_ref::<ContextError>() {
            return Some(e.code());
        }
        if let Some(e) = e.downcast_ref::<ClientError>() {
            return Some(e.error_code());
        }
        if e.downcast_ref::<PrintError>().is_some() {
            return Some(ErrorCode::PrinterNotAvailable);
        }
        current = e.source();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_error_codes() {
        assert_eq!(OrderError::EmptyCart.code(), ErrorCode::OrderEmpty);
        assert_eq!(
            OrderError::AlreadySubmitting.code(),
            ErrorCode::OrderAlreadySubmitting
        );
        let client = OrderError::from(ClientError::Internal("x".into()));
        assert_eq!(client.code(), ErrorCode::OrderSubmitFailed);
        assert_eq!(client.to_string(), "Internal error: x");
    }

    #[test]
    fn test_import_error_message() {
        let err = ImportError::InvalidRow {
            row: 3,
            reason: "missing item code".into(),
        };
        assert_eq!(err.to_string(), "Row 3: missing item code");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_error_code_of_walks_sources() {
        let err = ContextError::Corrupted(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(error_code_of(&err), Some(ErrorCode::StorageCorrupted));

        let err = anyhow::Error::from(OrderError::OutletNotFound(9)).context("select-outlet");
        assert_eq!(
            err.chain().find_map(error_code_of),
            Some(ErrorCode::OutletNotFound)
        );

        let err = ImportError::from(ClientError::PropertyNotSelected);
        assert_eq!(error_code_of(&err), Some(ErrorCode::PropertyNotSelected));

        let err = PrintError::InvalidAddress("nowhere".into());
        assert_eq!(
            error_code_of(&err).map(|c| c.category()),
            Some(shared::ErrorCategory::System)
        );

        assert_eq!(error_code_of(&std::fmt::Error), None);
    }
}
