//! Logging configuration from environment variables

use std::path::PathBuf;

const DEFAULT_LOG_LEVEL: &str = "client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name prefix inside `log_dir`
    pub file_prefix: String,
    /// Log level filter (e.g., "client=debug,info")
    pub log_level: String,
    /// Mirror logs to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_prefix: "microblog.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var("MICROBLOG_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            file_prefix: defaults.file_prefix,
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_to_stderr: std::env::var("MICROBLOG_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Path of today's log file is `log_dir/file_prefix.YYYY-MM-DD`
    pub fn log_path_prefix(&self) -> PathBuf {
        self.log_dir.join(&self.file_prefix)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
