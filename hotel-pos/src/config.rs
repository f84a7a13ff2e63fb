//! Terminal configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | HOTEL_API_URL | http://localhost:5000/api | hotel API base URL |
//! | REQUEST_TIMEOUT_SECS | 30 | HTTP timeout (seconds) |
//! | POS_CONTEXT_PATH | ./pos-context.json | persisted context file |
//! | PRINTER_ADDR | (unset) | ticket printer `host[:port]` |
//! | PAPER_WIDTH | 48 | ticket width in columns |
//! | TAX_MODE | stub | `stub` or `cascade` |
//! | LOG_LEVEL | info | log level |
//! | LOG_DIR | (unset) | directory for daily log files |
//!
//! ```ignore
//! HOTEL_API_URL=https://pms.example.com/api PRINTER_ADDR=10.0.0.7 hotel-pos status
//! ```

use std::path::PathBuf;

use hotel_client::ClientConfig;
use tracing::warn;

use crate::context::AppContext;
use crate::tax::TaxMode;

#[derive(Debug, Clone)]
pub struct PosConfig {
    pub api_url: String,
    pub request_timeout_secs: u64,
    pub context_path: PathBuf,
    pub printer_addr: Option<String>,
    pub paper_width: usize,
    pub tax_mode: TaxMode,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl PosConfig {
    /// Read from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`PosConfig::from_env`] over any variable source
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| var(name).filter(|v| !v.trim().is_empty());

        let tax_mode = match non_empty("TAX_MODE").map(|v| v.parse::<TaxMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                warn!(error = %e, "falling back to stub tax mode");
                TaxMode::Stub
            }
            None => TaxMode::Stub,
        };

        Self {
            api_url: non_empty("HOTEL_API_URL")
                .unwrap_or_else(|| "http://localhost:5000/api".into()),
            request_timeout_secs: non_empty("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            context_path: non_empty("POS_CONTEXT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./pos-context.json")),
            printer_addr: non_empty("PRINTER_ADDR"),
            paper_width: non_empty("PAPER_WIDTH")
                .and_then(|v| v.parse().ok())
                .filter(|w| *w >= 24)
                .unwrap_or(48),
            tax_mode,
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR").map(PathBuf::from),
        }
    }

    /// Client settings for the current context (token and property)
    pub fn client_config(&self, ctx: &AppContext) -> ClientConfig {
        let mut config =
            ClientConfig::new(self.api_url.as_str()).with_timeout(self.request_timeout_secs);
        if let Some(token) = &ctx.access_token {
            config = config.with_token(token.as_str());
        }
        if let Some(hotel_id) = ctx.hotel_id {
            config = config.with_hotel(hotel_id);
        }
        config
    }
}

impl Default for PosConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> PosConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        PosConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = PosConfig::default();
        assert_eq!(c.api_url, "http://localhost:5000/api");
        assert_eq!(c.request_timeout_secs, 30);
        assert_eq!(c.paper_width, 48);
        assert_eq!(c.tax_mode, TaxMode::Stub);
        assert!(c.printer_addr.is_none());
    }

    #[test]
    fn test_overrides_and_bad_values() {
        let c = config(&[
            ("HOTEL_API_URL", "https://pms.example.com/api"),
            ("REQUEST_TIMEOUT_SECS", "abc"),
            ("PAPER_WIDTH", "32"),
            ("TAX_MODE", "cascade"),
            ("PRINTER_ADDR", "  "),
        ]);
        assert_eq!(c.api_url, "https://pms.example.com/api");
        assert_eq!(c.request_timeout_secs, 30);
        assert_eq!(c.paper_width, 32);
        assert_eq!(c.tax_mode, TaxMode::Cascade);
        assert!(c.printer_addr.is_none());

        assert_eq!(config(&[("TAX_MODE", "flat")]).tax_mode, TaxMode::Stub);
    }

    #[test]
    fn test_client_config_from_context() {
        let ctx = AppContext {
            access_token: Some("tok".into()),
            hotel_id: Some(3),
            ..AppContext::default()
        };
        let client = PosConfig::default().client_config(&ctx);
        assert_eq!(client.token.as_deref(), Some("tok"));
        assert_eq!(client.hotel_id, Some(3));
        assert_eq!(client.timeout, 30);
    }
}
