//! # Services Module
//!
//! Remote API access and the small amount of client-side logic built on top of it.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - ApiClient: one method per REST operation, session header injection
//! ├── feed.rs     - Feed page with likes/replies per post, bounded fan-out
//! └── social.rs   - FollowTracker: locally tracked following state
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Front end (CLI, app)                  │
//! │                                                          │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐  │
//! │  │ load_feed    │   │FollowTracker │   │   direct     │  │
//! │  │ (feed.rs)    │   │ (social.rs)  │   │   calls      │  │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘  │
//! │         └──────── &dyn ApiService ────────────┘          │
//! └──────────────────────────┬───────────────────────────────┘
//!                            │
//!                ┌───────────▼────────────┐      ┌────────────────┐
//!                │  ApiClient (api/)      │◄─────┤ SessionContext │
//!                └───────────┬────────────┘      └────────────────┘
//!                            │ HTTP/JSON + session token header
//!                            ▼
//!                ┌────────────────────────┐
//!                │  Microblog REST API    │
//!                └────────────────────────┘
//! ```
//!
//! ### Usage Pattern
//!
//! ```rust,no_run
//! use client::core::service::ApiService;
//! use client::services::api::ApiClient;
//! use client::services::feed::{load_feed, FeedQuery};
//!
//! # async fn run() -> client::Result<()> {
//! let api = ApiClient::from_env()?;
//! api.login("alice", "secret").await?;
//!
//! let feed = load_feed(&api, &FeedQuery::default(), api.max_concurrent_requests()).await?;
//! for post in &feed.posts {
//!     println!("{}: {} ({} likes)", post.user_login, post.message, feed.like_count(post.id));
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod feed;
pub mod social;

#[cfg(test)]
pub(crate) mod mock;
