//! Client error types
//!
//! Failures are flat from the caller's point of view: whatever went wrong,
//! [`ClientError::message`] yields the one string a slice stores.

use http::StatusCode;
use shared::error::{ErrorCode, ProblemDetails};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the API
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A hotel-scoped resource was requested without a selected property
    #[error("No hotel property selected")]
    PropertyNotSelected,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Flattened message for display and slice storage
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Best-effort classification into the shared error code table
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Api { code: Some(code), .. } => *code,
            Self::Api { status, .. } => match *status {
                401 => ErrorCode::NotAuthenticated,
                403 => ErrorCode::PermissionDenied,
                404 => ErrorCode::NotFound,
                409 => ErrorCode::AlreadyExists,
                400..500 => ErrorCode::InvalidRequest,
                _ => ErrorCode::InternalError,
            },
            Self::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            Self::Http(_) => ErrorCode::NetworkError,
            Self::InvalidResponse(_) | Self::Serialization(_) => ErrorCode::InvalidFormat,
            Self::PropertyNotSelected => ErrorCode::PropertyNotSelected,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Build the error for a non-success response body
    ///
    /// Prefers the server's `detail`, then `title`; falls back to the raw
    /// body text and finally to the status reason phrase.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let problem = serde_json::from_str::<ProblemDetails>(body).ok();
        let message = problem
            .as_ref()
            .and_then(|p| p.display_message())
            .map(str::to_string)
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        Self::Api {
            status: status.as_u16(),
            code: problem.and_then(|p| p.code),
            message,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_detail_over_title() {
        let body = r#"{"title":"Bad Request","detail":"Item code BEV-1 exists","status":409}"#;
        let err = ClientError::from_response(StatusCode::CONFLICT, body);
        assert_eq!(err.message(), "Item code BEV-1 exists");
        assert_eq!(err.error_code(), ErrorCode::AlreadyExists);
    }

    #[test]
    fn test_unknown_server_code_keeps_detail() {
        let body = r#"{"title":"Conflict","detail":"Item code BEV-1 exists","code":40901}"#;
        let err = ClientError::from_response(StatusCode::CONFLICT, body);
        assert_eq!(err.message(), "Item code BEV-1 exists");
        assert!(matches!(err, ClientError::Api { code: None, status: 409, .. }));
        assert_eq!(err.error_code(), ErrorCode::AlreadyExists);

        let body = r#"{"title":"Conflict","code":"ITEM_EXISTS"}"#;
        let err = ClientError::from_response(StatusCode::CONFLICT, body);
        assert_eq!(err.message(), "Conflict");
    }

    #[test]
    fn test_title_when_no_detail() {
        let body = r#"{"title":"One or more validation errors occurred."}"#;
        let err = ClientError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.message(), "One or more validation errors occurred.");
        assert_eq!(err.error_code(), ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_server_code_wins() {
        let body = r#"{"detail":"Table T4 is occupied","code":7002}"#;
        let err = ClientError::from_response(StatusCode::CONFLICT, body);
        assert_eq!(err.error_code(), ErrorCode::TableOccupied);
    }

    #[test]
    fn test_plain_text_and_empty_bodies() {
        let err = ClientError::from_response(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.message(), "upstream down");

        let err = ClientError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.message(), "Internal Server Error");

        let err = ClientError::from_response(StatusCode::UNAUTHORIZED, "{}");
        assert_eq!(err.message(), "Unauthorized");
        assert_eq!(err.error_code(), ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_non_api_messages() {
        assert_eq!(
            ClientError::PropertyNotSelected.message(),
            "No hotel property selected"
        );
        assert_eq!(
            ClientError::PropertyNotSelected.error_code(),
            ErrorCode::PropertyNotSelected
        );
        assert!(
            ClientError::InvalidResponse("missing id".into())
                .message()
                .contains("missing id")
        );
    }
}
