//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Client error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The `ApiService` trait implemented by [`crate::services::api::ApiClient`]
//!
//! ## Dependency Injection
//!
//! Code that drives the API takes `&dyn ApiService` so tests can substitute a mock:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use client::core::service::ApiService;
//! use client::services::api::ApiClient;
//!
//! # fn build() -> client::Result<()> {
//! let api: Arc<dyn ApiService> = Arc::new(ApiClient::from_env()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
