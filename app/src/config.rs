//! Lookup settings: environment first, CLI flags on top.

use std::time::Duration;

pub const DEFAULT_DOH_URL: &str = "https://dns.google/resolve";
const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// JSON DoH endpoint, queried as `?name=..&type=HTTPS`
    pub doh_url: String,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            doh_url: DEFAULT_DOH_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl LookupConfig {
    /// Reads `ECH_INSPECT_DOH_URL` and `ECH_INSPECT_DOH_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("ECH_INSPECT_DOH_URL").ok(),
            std::env::var("ECH_INSPECT_DOH_TIMEOUT_MS").ok().as_deref(),
        )
    }

    fn from_values(url: Option<String>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        let doh_url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(defaults.doh_url);
        let timeout = timeout_ms
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.timeout);
        Self { doh_url, timeout }
    }

    pub fn with_overrides(mut self, doh_url: Option<String>, timeout_ms: Option<u64>) -> Self {
        if let Some(url) = doh_url {
            self.doh_url = url;
        }
        if let Some(ms) = timeout_ms {
            self.timeout = Duration::from_millis(ms);
        }
        self
    }
}
