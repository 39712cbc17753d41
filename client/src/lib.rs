//! # Microblog Client - Library Root
//!
//! Session-authenticated client for a microblog REST API: users, posts, replies,
//! likes and follows.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              client (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  Reqwest       - HTTP client                           │
//! │  Tokio         - Async runtime                         │
//! │  futures       - Bounded per-post fan-out              │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTPS + x-session-token
//!          ▼
//! ┌─────────────────────┐
//! │  Microblog REST API │
//! └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: `AppError` and the `ApiService` trait
//! - **config**: `ClientConfig` (base URL, timeout, header, concurrency, session file)
//! - **session**: `SessionContext` and the `SessionStore` implementations
//! - **services**
//!   - `api`: `ApiClient`, one method per REST operation
//!   - `feed`: feed page with likes and replies per post
//!   - `social`: locally tracked following state
//! - **debug**: logging initialization
//!
//! ## Core Concepts
//!
//! ### Session Handling
//!
//! The client is constructed with an explicit [`session::SessionContext`]. Login
//! persists `session_id`, `session_token` and `user_login` through the context's
//! store; logout and account deletion clear them. Each request snapshots the session
//! when it is built and sends the token header only if a session is active.
//!
//! ### Failures
//!
//! No retries and no reinterpretation: every failure is logged and returned as an
//! [`AppError`]. Blank search terms, blank messages and mismatched password
//! confirmations are rejected before any request is sent.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use client::config::ClientConfig;
//! use client::core::service::ApiService;
//! use client::services::api::ApiClient;
//! use client::session::{MemoryStore, SessionContext};
//!
//! # async fn run() -> client::Result<()> {
//! let session = Arc::new(SessionContext::new(Arc::new(MemoryStore::new())));
//! let api = ApiClient::new(&ClientConfig::default(), session)?;
//!
//! let session = api.login("alice", "secret").await?;
//! let post = api.create_post("hello world").await?;
//! api.like_post(post.id).await?;
//! api.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use core::{ApiService, AppError, Result};
pub use services::api::{ApiClient, FollowStatus};
pub use session::SessionContext;
