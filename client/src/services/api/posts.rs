//! # Post Endpoints
//!
//! Posts and their replies and likes.

use super::client::ApiClient;
use super::users::list_query;
use crate::core::error::{AppError, Result};
use lib_utils::{validate_not_empty, validate_search_term};
use reqwest::Method;
use shared::{Like, Post, PostEnvelope, Reply, ReplyEnvelope};

impl ApiClient {
    /// List posts, optionally filtered.
    pub async fn list_posts(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<Post>> {
        self.send_json(
            "list_posts",
            self.request(Method::GET, &["posts"])
                .query(&list_query(search, page)),
        )
        .await
    }

    /// Search posts by a non-blank term.
    #[tracing::instrument(skip(self))]
    pub async fn search_posts(&self, term: &str, page: Option<u32>) -> Result<Vec<Post>> {
        let term = validate_search_term(term).map_err(AppError::Validation)?;
        self.list_posts(Some(term), page).await
    }

    /// Create a post.
    #[tracing::instrument(skip(self, message))]
    pub async fn create_post(&self, message: &str) -> Result<Post> {
        validate_not_empty(message, "Message").map_err(AppError::Validation)?;

        let post: Post = self
            .send_json(
                "create_post",
                self.request(Method::POST, &["posts"])
                    .json(&PostEnvelope::new(message)),
            )
            .await?;
        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Delete a post.
    #[tracing::instrument(skip(self))]
    pub async fn delete_post(&self, post_id: i64) -> Result<()> {
        let id = post_id.to_string();
        self.send_empty("delete_post", self.request(Method::DELETE, &["posts", id.as_str()]))
            .await
    }

    /// Reply to a post.
    #[tracing::instrument(skip(self, message))]
    pub async fn reply_to_post(&self, post_id: i64, message: &str) -> Result<Reply> {
        validate_not_empty(message, "Reply").map_err(AppError::Validation)?;

        let id = post_id.to_string();
        self.send_json(
            "reply_to_post",
            self.request(Method::POST, &["posts", id.as_str(), "replies"])
                .json(&ReplyEnvelope::new(message)),
        )
        .await
    }

    /// List a post's replies.
    pub async fn list_replies(&self, post_id: i64) -> Result<Vec<Reply>> {
        let id = post_id.to_string();
        self.send_json(
            "list_replies",
            self.request(Method::GET, &["posts", id.as_str(), "replies"]),
        )
        .await
    }

    /// Like a post.
    #[tracing::instrument(skip(self))]
    pub async fn like_post(&self, post_id: i64) -> Result<Like> {
        let id = post_id.to_string();
        self.send_json("like_post", self.request(Method::POST, &["posts", id.as_str(), "likes"]))
            .await
    }

    /// Remove like `like_id` from a post.
    #[tracing::instrument(skip(self))]
    pub async fn unlike_post(&self, post_id: i64, like_id: i64) -> Result<()> {
        let id = post_id.to_string();
        let like = like_id.to_string();
        self.send_empty(
            "unlike_post",
            self.request(Method::DELETE, &["posts", id.as_str(), "likes", like.as_str()]),
        )
        .await
    }

    /// List a post's likes.
    pub async fn list_likes(&self, post_id: i64) -> Result<Vec<Like>> {
        let id = post_id.to_string();
        self.send_json("list_likes", self.request(Method::GET, &["posts", id.as_str(), "likes"]))
            .await
    }
}
