//! Error body returned by the hotel API

use super::codes::ErrorCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Error body of the hotel API (`application/problem+json`)
///
/// The server fills `detail` for business failures and `title` for
/// framework-level ones; either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Legacy endpoints put the text here instead of `detail`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Codes outside the local catalog read as `None`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "known_code"
    )]
    pub code: Option<ErrorCode>,
}

impl ProblemDetails {
    /// Body for a coded failure with a specific message
    pub fn with_code(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            title: Some(code.message().to_string()),
            detail: Some(detail.into()),
            code: Some(code),
            ..Self::default()
        }
    }

    /// The single message shown to the user: `detail`, else `title`, else `message`
    pub fn display_message(&self) -> Option<&str> {
        [&self.detail, &self.title, &self.message]
            .into_iter()
            .filter_map(|s| s.as_deref())
            .find(|s| !s.trim().is_empty())
    }
}

/// Accept any JSON in `code`; keep it only when it names a known code
fn known_code<'de, D>(deserializer: D) -> Result<Option<ErrorCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|n| u16::try_from(n).ok())
        .and_then(|n| ErrorCode::try_from(n).ok()))
}
