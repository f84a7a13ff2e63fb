//! Application context
//!
//! Everything the terminal remembers between runs: the token issued at
//! sign-in, the selected property and outlet, and the flag that holds back
//! the outlet prompt while an outlet is being created. Stored as one JSON
//! file; a missing file is an empty context.

use std::path::Path;

use serde::{Deserialize, Serialize};
use shared::models::OutletSummary;
use tracing::{debug, info};

use crate::error::ContextError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppContext {
    /// Bearer token for the hotel API
    pub access_token: Option<String>,
    /// Selected property (hotel)
    pub hotel_id: Option<i64>,
    pub selected_outlet_id: Option<i64>,
    /// Denormalized copy of the selected outlet for display
    pub selected_outlet: Option<OutletSummary>,
    /// Set while the user is creating a new outlet inline
    pub suppress_outlet_prompt: bool,
}

impl AppContext {
    /// Load from file, or an empty context if the file does not exist
    pub fn load(path: &Path) -> Result<Self, ContextError> {
        if !path.exists() {
            debug!(path = %path.display(), "no context file, starting empty");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save to file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ContextError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Forget everything and delete the file
    pub fn clear(&mut self, path: &Path) -> Result<(), ContextError> {
        *self = Self::default();
        Self::remove(path)
    }

    /// Delete the file without reading it; works on a corrupted file
    pub fn remove(path: &Path) -> Result<(), ContextError> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        info!(path = %path.display(), "context cleared");
        Ok(())
    }

    /// Switch property; the outlet belongs to the old property and goes too
    pub fn set_property(&mut self, hotel_id: i64, token: Option<String>) {
        if self.hotel_id != Some(hotel_id) {
            self.selected_outlet_id = None;
            self.selected_outlet = None;
        }
        self.hotel_id = Some(hotel_id);
        if token.is_some() {
            self.access_token = token;
        }
    }

    pub fn set_outlet(&mut self, summary: OutletSummary) {
        self.selected_outlet_id = Some(summary.id);
        self.selected_outlet = Some(summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64) -> OutletSummary {
        OutletSummary {
            id,
            name: format!("Outlet {}", id),
            currency: "LKR".into(),
        }
    }

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::load(&dir.path().join("none.json")).unwrap();
        assert_eq!(ctx, AppContext::default());
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("ctx.json");

        let mut ctx = AppContext::default();
        ctx.set_property(3, Some("tok".into()));
        ctx.set_outlet(summary(9));
        ctx.suppress_outlet_prompt = true;
        ctx.save(&path).unwrap();

        let mut loaded = AppContext::load(&path).unwrap();
        assert_eq!(loaded, ctx);

        loaded.clear(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(loaded.hotel_id, None);
    }

    #[test]
    fn test_corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctx.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = AppContext::load(&path).unwrap_err();
        assert!(matches!(err, ContextError::Corrupted(_)));

        AppContext::remove(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(AppContext::load(&path).unwrap(), AppContext::default());
    }

    #[test]
    fn test_unknown_and_missing_fields_tolerated() {
        let ctx: AppContext = serde_json::from_str(r#"{"hotel_id": 2, "theme": "dark"}"#).unwrap();
        assert_eq!(ctx.hotel_id, Some(2));
        assert!(!ctx.suppress_outlet_prompt);
    }

    #[test]
    fn test_switching_property_drops_outlet() {
        let mut ctx = AppContext::default();
        ctx.set_property(1, Some("a".into()));
        ctx.set_outlet(summary(4));

        ctx.set_property(1, None);
        assert_eq!(ctx.selected_outlet_id, Some(4));
        assert_eq!(ctx.access_token.as_deref(), Some("a"));

        ctx.set_property(2, None);
        assert_eq!(ctx.selected_outlet_id, None);
        assert!(ctx.selected_outlet.is_none());
    }
}
