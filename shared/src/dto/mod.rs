//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the microblog REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login request and session
//! - [`users`] - User resource, registration and update forms
//! - [`posts`] - Posts, replies, likes
//! - [`follow`] - Follow edges
//! - [`errors`] - Validation-error bodies returned on rejected requests
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /sessions
//! Content-Type: application/json
//!
//! {
//!   "login": "alice",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 201 Created
//! Content-Type: application/json
//!
//! {
//!   "id": 42,
//!   "token": "f3a9c1...",
//!   "user_login": "alice"
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod follow;
pub mod posts;
pub mod users;

pub use auth::*;
pub use errors::*;
pub use follow::*;
pub use posts::*;
pub use users::*;
