//! # Service Traits
//!
//! The facade's operation set as a trait, so feed aggregation, follow tracking and
//! front ends can be driven by a mock in tests.

use crate::core::error::Result;
use crate::services::api::FollowStatus;
use async_trait::async_trait;
use shared::{Follower, Like, Post, Reply, Session, User, UserForm};

/// Trait for API service operations
///
/// One method per remote operation. Implementations resolve to the decoded response
/// body and surface failures unchanged.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Snapshot of the active session, if any
    fn current_session(&self) -> Option<Session>;

    /// Register a new user
    async fn register(&self, form: UserForm) -> Result<User>;

    /// Log in and persist the resulting session
    async fn login(&self, login: &str, password: &str) -> Result<Session>;

    /// Invalidate the active session remotely and clear it locally
    async fn logout(&self) -> Result<()>;

    /// Update a user's profile (`user_id` is the id or login the service routes on)
    async fn update_user(&self, user_id: &str, form: UserForm) -> Result<User>;

    /// Delete a user account; clears the local session on success
    async fn delete_user(&self, user_id: &str) -> Result<()>;

    /// List users, optionally filtered by a search term
    async fn list_users(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<User>>;

    /// Search users; blank terms are rejected locally
    async fn search_users(&self, term: &str, page: Option<u32>) -> Result<Vec<User>>;

    /// Fetch a single user by login
    async fn get_user(&self, login: &str) -> Result<User>;

    /// Follow `login` as the current user
    async fn follow(&self, login: &str) -> Result<Follower>;

    /// Remove the follow edge `follower_id` from `login`'s followers
    async fn unfollow(&self, login: &str, follower_id: i64) -> Result<()>;

    /// List `login`'s followers
    async fn list_followers(&self, login: &str) -> Result<Vec<Follower>>;

    /// Whether the current user follows `login`
    async fn follow_status(&self, login: &str) -> Result<FollowStatus>;

    /// List posts, optionally filtered by a search term
    async fn list_posts(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<Post>>;

    /// Search posts; blank terms are rejected locally
    async fn search_posts(&self, term: &str, page: Option<u32>) -> Result<Vec<Post>>;

    /// Create a post as the current user
    async fn create_post(&self, message: &str) -> Result<Post>;

    /// Delete a post
    async fn delete_post(&self, post_id: i64) -> Result<()>;

    /// Reply to a post
    async fn reply_to_post(&self, post_id: i64, message: &str) -> Result<Reply>;

    /// List a post's replies
    async fn list_replies(&self, post_id: i64) -> Result<Vec<Reply>>;

    /// Like a post
    async fn like_post(&self, post_id: i64) -> Result<Like>;

    /// Remove a like from a post
    async fn unlike_post(&self, post_id: i64, like_id: i64) -> Result<()>;

    /// List a post's likes
    async fn list_likes(&self, post_id: i64) -> Result<Vec<Like>>;
}
