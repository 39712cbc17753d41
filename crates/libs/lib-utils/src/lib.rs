//! # Utilities Library
//!
//! Shared utility functions for environment variables, time display, and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse, get_env_parse_or};
pub use time::format_relative;
pub use validation::{validate_matching, validate_not_empty, validate_search_term};
