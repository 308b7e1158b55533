//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::{CufError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.cufinder.io/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 0;

/// Settings for one transport. Several configurations with different keys
/// or timeouts may be used side by side.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    /// Attempts after the first one for 5xx responses. Calls consume credits,
    /// so the default is a single attempt.
    pub max_retries: u32,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Load from `CUFINDER_API_KEY` (required), `CUFINDER_BASE_URL`,
    /// `CUFINDER_TIMEOUT_SECS` and `CUFINDER_MAX_RETRIES`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("CUFINDER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CufError::Config("CUFINDER_API_KEY is required".to_string()))?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup("CUFINDER_BASE_URL").filter(|s| !s.trim().is_empty()) {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(CufError::Config(
                    "CUFINDER_BASE_URL must start with http:// or https://".to_string(),
                ));
            }
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("CUFINDER_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                CufError::Config(format!("CUFINDER_TIMEOUT_SECS must be a number, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("CUFINDER_MAX_RETRIES") {
            config.max_retries = raw.trim().parse().map_err(|_| {
                CufError::Config(format!("CUFINDER_MAX_RETRIES must be a number, got {raw:?}"))
            })?;
        }

        tracing::debug!(
            base_url = %config.base_url,
            timeout_secs = config.timeout.as_secs(),
            max_retries = config.max_retries,
            "configuration loaded"
        );
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}
