//! # Client Configuration
//!
//! Configuration for the API client, loaded from environment variables.
//! Validated up front so a misconfigured client fails before its first request.
//!
//! | Variable | Default |
//! |---|---|
//! | `MICROBLOG_API_URL` | `https://api.papacapim.just.pro.br:8000` |
//! | `MICROBLOG_TIMEOUT_MS` | `5000` |
//! | `MICROBLOG_SESSION_HEADER` | `x-session-token` |
//! | `MICROBLOG_MAX_CONCURRENCY` | `4` |
//! | `MICROBLOG_SESSION_FILE` | `<data dir>/microblog/session.json` |

use crate::core::error::{AppError, Result};
use lib_utils::{get_env_or, get_env_parse_or};
use reqwest::header::HeaderName;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the remote service
pub const DEFAULT_API_URL: &str = "https://api.papacapim.just.pro.br:8000";

/// Header carrying the session token
pub const DEFAULT_SESSION_HEADER: &str = "x-session-token";

const DEFAULT_TIMEOUT_MS: u64 = 5000;
const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin every request path is joined onto
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Name of the header the session token is sent in
    pub session_header: String,
    /// Upper bound on in-flight requests during feed aggregation
    pub max_concurrent_requests: usize,
    /// Where `FileStore` keeps the persisted session
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_header: DEFAULT_SESSION_HEADER.to_string(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENCY,
            session_file: default_session_file(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url`, everything else default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = get_env_or("MICROBLOG_API_URL", DEFAULT_API_URL);

        let timeout_ms: u64 = get_env_parse_or("MICROBLOG_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)
            .map_err(|e| AppError::Config(format!("MICROBLOG_TIMEOUT_MS must be a number of milliseconds: {e}")))?;

        let session_header = get_env_or("MICROBLOG_SESSION_HEADER", DEFAULT_SESSION_HEADER);

        let max_concurrent_requests: usize =
            get_env_parse_or("MICROBLOG_MAX_CONCURRENCY", DEFAULT_MAX_CONCURRENCY)
                .map_err(|e| AppError::Config(format!("MICROBLOG_MAX_CONCURRENCY must be a number: {e}")))?;

        let session_file = std::env::var("MICROBLOG_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let config = Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            session_header,
            max_concurrent_requests,
            session_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("invalid API URL {:?}: {e}", self.base_url)))?;

        if self.timeout.is_zero() {
            return Err(AppError::Config("timeout must be greater than zero".to_string()));
        }

        if self.max_concurrent_requests == 0 {
            return Err(AppError::Config(
                "max concurrent requests must be at least 1".to_string(),
            ));
        }

        HeaderName::from_bytes(self.session_header.as_bytes()).map_err(|_| {
            AppError::Config(format!("invalid session header name {:?}", self.session_header))
        })?;

        Ok(())
    }
}

fn default_session_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("microblog")
        .join("session.json")
}
