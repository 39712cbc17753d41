//! # Follow Tracking
//!
//! Locally tracked "following" state for the current user, keyed by login, holding
//! the follow-edge id that unfollow needs.

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::api::FollowStatus;
use shared::Follower;
use std::collections::HashMap;

/// Who the current user follows, as far as this client has seen.
#[derive(Debug, Clone, Default)]
pub struct FollowTracker {
    following: HashMap<String, i64>,
}

impl FollowTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_following(&self, login: &str) -> bool {
        self.following.contains_key(login)
    }

    /// Edge id of the tracked follow of `login`.
    pub fn edge_id(&self, login: &str) -> Option<i64> {
        self.following.get(login).copied()
    }

    /// Ask the service and record the answer.
    pub async fn refresh(&mut self, api: &dyn ApiService, login: &str) -> Result<FollowStatus> {
        let status = api.follow_status(login).await?;
        match status.edge_id() {
            Some(edge) => {
                self.following.insert(login.to_string(), edge);
            }
            None => {
                self.following.remove(login);
            }
        }
        Ok(status)
    }

    /// Follow `login` and track the new edge.
    pub async fn follow(&mut self, api: &dyn ApiService, login: &str) -> Result<Follower> {
        let edge = api.follow(login).await?;
        self.following.insert(login.to_string(), edge.follower_id);
        Ok(edge)
    }

    /// Unfollow `login` through its tracked edge, asking the service for the edge when
    /// it is not tracked yet.
    ///
    /// A tracked edge the service no longer knows (404) is dropped and the current
    /// status is fetched; a newer edge, if any, is removed instead.
    pub async fn unfollow(&mut self, api: &dyn ApiService, login: &str) -> Result<()> {
        let edge = match self.edge_id(login) {
            Some(edge) => edge,
            None => self
                .refresh(api, login)
                .await?
                .edge_id()
                .ok_or_else(|| AppError::Validation(format!("You are not following {login}")))?,
        };

        match api.unfollow(login, edge).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                tracing::warn!(login, follower_id = edge, "Tracked follow edge is gone");
                self.following.remove(login);
                match self.refresh(api, login).await?.edge_id() {
                    Some(current) if current != edge => api.unfollow(login, current).await?,
                    _ => {}
                }
            }
            Err(e) => return Err(e),
        }

        self.following.remove(login);
        tracing::info!(login, "Unfollowed");
        Ok(())
    }
}
