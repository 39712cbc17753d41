//! # Logging Infrastructure
//!
//! File-based structured logging for the client and its front ends.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and keep the guard alive until exit
//! let _guard = client::debug::init_logger();
//!
//! tracing::info!(operation = "login", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `client=debug,info`)
//! - `MICROBLOG_LOG_DIR`: Log directory (default: `logs`)
//! - `MICROBLOG_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
