//! # Follow Endpoints
//!
//! Follow edges live under the followed user: `/users/:login/followers`.
//! Unfollow takes the edge id (`Follower::follower_id`), never a user id.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use reqwest::Method;
use shared::Follower;

/// Whether the current user follows someone.
///
/// A missing edge is a value here, not an error; only genuine failures are `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowStatus {
    /// Following through this edge
    Following(Follower),
    NotFollowing,
}

impl FollowStatus {
    pub fn is_following(&self) -> bool {
        matches!(self, FollowStatus::Following(_))
    }

    /// Edge id to pass to unfollow.
    pub fn edge_id(&self) -> Option<i64> {
        match self {
            FollowStatus::Following(edge) => Some(edge.follower_id),
            FollowStatus::NotFollowing => None,
        }
    }
}

impl ApiClient {
    /// Follow `login` as the current user.
    #[tracing::instrument(skip(self))]
    pub async fn follow(&self, login: &str) -> Result<Follower> {
        let edge: Follower = self
            .send_json(
                "follow",
                self.request(Method::POST, &["users", login, "followers"]),
            )
            .await?;
        tracing::info!(follower_id = edge.follower_id, "Now following");
        Ok(edge)
    }

    /// Remove follow edge `follower_id` from `login`'s followers.
    #[tracing::instrument(skip(self))]
    pub async fn unfollow(&self, login: &str, follower_id: i64) -> Result<()> {
        let edge = follower_id.to_string();
        self.send_empty(
            "unfollow",
            self.request(Method::DELETE, &["users", login, "followers", edge.as_str()]),
        )
        .await
    }

    /// List `login`'s followers.
    pub async fn list_followers(&self, login: &str) -> Result<Vec<Follower>> {
        self.send_json(
            "list_followers",
            self.request(Method::GET, &["users", login, "followers"]),
        )
        .await
    }

    /// Whether the current user follows `login`.
    ///
    /// A 404 from the followers route means the edge is absent.
    #[tracing::instrument(skip(self))]
    pub async fn follow_status(&self, login: &str) -> Result<FollowStatus> {
        let me = self
            .session()
            .user_login()
            .ok_or(AppError::NotAuthenticated)?;

        match self.list_followers(login).await {
            Ok(followers) => Ok(followers
                .into_iter()
                .find(|edge| edge.follower_login == me)
                .map_or(FollowStatus::NotFollowing, FollowStatus::Following)),
            Err(e) if e.is_not_found() => Ok(FollowStatus::NotFollowing),
            Err(e) => Err(e),
        }
    }
}
