//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the microblog client and the remote REST API.
//! All DTOs use JSON serialization via `serde` for API communication.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login request and session DTOs
//!   - **[`dto::users`]**: User resource and registration/update forms
//!   - **[`dto::posts`]**: Posts, replies and likes
//!   - **[`dto::follow`]**: Follow edges
//!   - **[`dto::errors`]**: Structured validation-error bodies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::preview`]**: Shorten a message for single-line display
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Write forms are wrapped in a resource envelope (`{"user": {...}}`, `{"post": {...}}`)
//! - Fields the server may omit are `Option` with `#[serde(default)]`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::{LoginRequest, Session};
//!
//! let request = LoginRequest {
//!     login: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"login":"alice","password":"secret"}"#);
//!
//! let session: Session =
//!     serde_json::from_str(r#"{"id":42,"token":"f3a9c1","user_login":"alice"}"#).unwrap();
//! assert_eq!(session.user_login, "alice");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
