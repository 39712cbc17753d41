//! In-memory `ApiService` used by unit tests.

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::api::FollowStatus;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use shared::{Follower, Like, Post, Reply, Session, User, UserForm};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::time::Duration;

/// Which per-post collection a call touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Likes(i64),
    Replies(i64),
}

/// Logged in as `alice`. Posts `1..=n` by `bob`; alice likes post 1.
/// Likes of posts listed in `failing_likes` fail with a 500.
pub struct MockApi {
    pub posts: Vec<Post>,
    pub likes: Mutex<HashMap<i64, Vec<Like>>>,
    pub followers: Mutex<HashMap<String, Vec<Follower>>>,
    pub calls: Mutex<Vec<Call>>,
    pub failing_likes: Mutex<Vec<i64>>,
    pub in_flight: AtomicUsize,
    pub peak: AtomicUsize,
    next_id: AtomicI64,
}

impl MockApi {
    pub fn new(n: i64) -> Self {
        let posts = (1..=n)
            .map(|id| Post {
                id,
                user_login: "bob".to_string(),
                message: format!("post {id}"),
                created_at: None,
            })
            .collect();

        let mut likes = HashMap::new();
        likes.insert(
            1,
            vec![Like {
                id: 100,
                user_login: "alice".to_string(),
                post_id: Some(1),
            }],
        );

        Self {
            posts,
            likes: Mutex::new(likes),
            followers: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            failing_likes: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
            next_id: AtomicI64::new(500),
        }
    }

    pub fn with_failing_likes(self, post_ids: &[i64]) -> Self {
        *self.failing_likes.lock() = post_ids.to_vec();
        self
    }

    /// Let likes of every post load again.
    pub fn recover_likes(&self) {
        self.failing_likes.lock().clear();
    }

    pub fn likes_by(&self, post_id: i64, login: &str) -> usize {
        self.likes
            .lock()
            .get(&post_id)
            .map_or(0, |likes| likes.iter().filter(|l| l.user_login == login).count())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn track(&self, call: Call) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.calls.lock().push(call);
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

fn not_found() -> AppError {
    AppError::rejected(StatusCode::NOT_FOUND, "Not Found".to_string())
}

#[async_trait]
impl ApiService for MockApi {
    fn current_session(&self) -> Option<Session> {
        Some(Session {
            id: 1,
            token: "t".to_string(),
            user_login: "alice".to_string(),
        })
    }

    async fn register(&self, _form: UserForm) -> Result<User> {
        unimplemented!()
    }

    async fn login(&self, _login: &str, _password: &str) -> Result<Session> {
        unimplemented!()
    }

    async fn logout(&self) -> Result<()> {
        unimplemented!()
    }

    async fn update_user(&self, _user_id: &str, _form: UserForm) -> Result<User> {
        unimplemented!()
    }

    async fn delete_user(&self, _user_id: &str) -> Result<()> {
        unimplemented!()
    }

    async fn list_users(&self, _search: Option<&str>, _page: Option<u32>) -> Result<Vec<User>> {
        unimplemented!()
    }

    async fn search_users(&self, _term: &str, _page: Option<u32>) -> Result<Vec<User>> {
        unimplemented!()
    }

    async fn get_user(&self, _login: &str) -> Result<User> {
        unimplemented!()
    }

    async fn follow(&self, login: &str) -> Result<Follower> {
        let edge = Follower {
            follower_id: self.next_id(),
            follower_login: "alice".to_string(),
        };
        self.followers
            .lock()
            .entry(login.to_string())
            .or_default()
            .push(edge.clone());
        Ok(edge)
    }

    async fn unfollow(&self, login: &str, follower_id: i64) -> Result<()> {
        let mut followers = self.followers.lock();
        let edges = followers.get_mut(login).ok_or_else(not_found)?;
        let before = edges.len();
        edges.retain(|edge| edge.follower_id != follower_id);
        if edges.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_followers(&self, login: &str) -> Result<Vec<Follower>> {
        self.followers
            .lock()
            .get(login)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn follow_status(&self, login: &str) -> Result<FollowStatus> {
        match self.list_followers(login).await {
            Ok(edges) => Ok(edges
                .into_iter()
                .find(|edge| edge.follower_login == "alice")
                .map_or(FollowStatus::NotFollowing, FollowStatus::Following)),
            Err(e) if e.is_not_found() => Ok(FollowStatus::NotFollowing),
            Err(e) => Err(e),
        }
    }

    async fn list_posts(&self, _search: Option<&str>, _page: Option<u32>) -> Result<Vec<Post>> {
        Ok(self.posts.clone())
    }

    async fn search_posts(&self, term: &str, _page: Option<u32>) -> Result<Vec<Post>> {
        let term = lib_utils::validate_search_term(term).map_err(AppError::Validation)?;
        Ok(self
            .posts
            .iter()
            .filter(|post| post.message.contains(term))
            .cloned()
            .collect())
    }

    async fn create_post(&self, _message: &str) -> Result<Post> {
        unimplemented!()
    }

    async fn delete_post(&self, _post_id: i64) -> Result<()> {
        unimplemented!()
    }

    async fn reply_to_post(&self, _post_id: i64, _message: &str) -> Result<Reply> {
        unimplemented!()
    }

    async fn list_replies(&self, post_id: i64) -> Result<Vec<Reply>> {
        self.track(Call::Replies(post_id)).await;
        Ok(vec![Reply {
            id: post_id * 10,
            user_login: "carol".to_string(),
            message: "nice".to_string(),
            post_id: Some(post_id),
        }])
    }

    async fn like_post(&self, post_id: i64) -> Result<Like> {
        let like = Like {
            id: self.next_id(),
            user_login: "alice".to_string(),
            post_id: Some(post_id),
        };
        self.likes.lock().entry(post_id).or_default().push(like.clone());
        Ok(like)
    }

    async fn unlike_post(&self, post_id: i64, like_id: i64) -> Result<()> {
        self.likes
            .lock()
            .entry(post_id)
            .or_default()
            .retain(|like| like.id != like_id);
        Ok(())
    }

    async fn list_likes(&self, post_id: i64) -> Result<Vec<Like>> {
        self.track(Call::Likes(post_id)).await;
        if self.failing_likes.lock().contains(&post_id) {
            return Err(AppError::rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                "boom".to_string(),
            ));
        }
        Ok(self.likes.lock().get(&post_id).cloned().unwrap_or_default())
    }
}
