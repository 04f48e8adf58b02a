//! Client configuration with environment overrides.

use std::time::Duration;

use crate::{CaptureOptions, Error, Result};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/screenshot";

/// Configuration for [`crate::ScreenshotClient`]
///
/// # Examples
///
/// ```
/// let cfg = websnap::ClientConfig::default();
/// assert_eq!(cfg.endpoint, "http://localhost:9000/screenshot");
/// assert!(cfg.timeout_ms.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full URL of the `POST /screenshot` endpoint
    pub endpoint: String,
    /// Request timeout in milliseconds; `None` waits forever
    pub timeout_ms: Option<u64>,
    /// Pause inserted between consecutive batch requests
    pub batch_delay: Duration,
    /// User agent string sent to the service
    pub user_agent: String,
    /// Capture options used when a caller has no preference
    pub defaults: CaptureOptions,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
            batch_delay: Duration::from_secs(1),
            user_agent: format!("websnap/{}", env!("CARGO_PKG_VERSION")),
            defaults: CaptureOptions::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `WEBSNAP_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each
    /// `WEBSNAP_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(endpoint) = lookup("WEBSNAP_ENDPOINT") {
            cfg.endpoint = endpoint;
        }
        if let Some(ua) = lookup("WEBSNAP_USER_AGENT") {
            cfg.user_agent = ua;
        }
        if let Some(ms) = parse_var(&lookup, "WEBSNAP_TIMEOUT_MS")? {
            cfg.timeout_ms = Some(ms);
        }
        if let Some(ms) = parse_var(&lookup, "WEBSNAP_BATCH_DELAY_MS")? {
            cfg.batch_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var(&lookup, "WEBSNAP_DEFAULT_WAIT_TIME")? {
            cfg.defaults.wait_time = secs;
        }
        if let Some(w) = parse_var(&lookup, "WEBSNAP_DEFAULT_VIEWPORT_WIDTH")? {
            cfg.defaults.viewport.width = w;
        }
        if let Some(h) = parse_var(&lookup, "WEBSNAP_DEFAULT_VIEWPORT_HEIGHT")? {
            cfg.defaults.viewport.height = h;
        }

        Ok(cfg)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(None),
    }
}
