//! # API Client
//!
//! Main HTTP client for the microblog REST API.
//!
//! Every request goes through [`ApiClient::request`], which snapshots the session and
//! injects the token header when a session is active. Responses go through
//! [`ApiClient::send_json`] / [`ApiClient::send_empty`], which log failures and return
//! them unchanged.

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::api::FollowStatus;
use crate::session::{FileStore, SessionContext};
use reqwest::header::HeaderName;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use shared::{Follower, Like, Post, Reply, Session, User, UserForm};
use std::sync::Arc;

/// HTTP client for the microblog REST API.
///
/// Cheap to share behind an `Arc`; the underlying `reqwest::Client` pools connections.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    session_header: HeaderName,
    session: Arc<SessionContext>,
    max_concurrent_requests: usize,
}

impl ApiClient {
    /// Create a client for `config`, reading and writing the session through `session`.
    pub fn new(config: &ClientConfig, session: Arc<SessionContext>) -> Result<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| AppError::Config(format!("invalid API URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "API URL {} cannot carry a path",
                config.base_url
            )));
        }

        let session_header = HeaderName::from_bytes(config.session_header.as_bytes())
            .map_err(|e| AppError::Config(format!("invalid session header: {e}")))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            session_header,
            session,
            max_concurrent_requests: config.max_concurrent_requests,
        })
    }

    /// Client configured from the environment, with the session persisted in a file.
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        let store = Arc::new(FileStore::new(&config.session_file));
        let session = Arc::new(SessionContext::load(store)?);
        Self::new(&config, session)
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }

    /// `base_url` with `segments` appended, each percent-encoded.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Start a request, attaching the session token from a fresh snapshot.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let builder = self.client.request(method, self.endpoint(segments));
        match self.session.snapshot() {
            Some(session) => builder.header(self.session_header.clone(), session.token),
            None => builder,
        }
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = self.dispatch(operation, builder).await?;
        response.json::<T>().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Response parse error");
            AppError::Decode(e.to_string())
        })
    }

    /// Send and discard the body.
    pub(crate) async fn send_empty(&self, operation: &'static str, builder: RequestBuilder) -> Result<()> {
        self.dispatch(operation, builder).await.map(|_| ())
    }

    async fn dispatch(&self, operation: &'static str, builder: RequestBuilder) -> Result<reqwest::Response> {
        let start = std::time::Instant::now();

        let response = builder.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "Network error");
            AppError::Transport(e)
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status.is_success() {
            tracing::debug!(operation, status = status.as_u16(), duration_ms = duration.as_millis(), "Request ok");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = AppError::rejected(status, body);
        tracing::warn!(
            operation,
            status = status.as_u16(),
            error = %error,
            duration_ms = duration.as_millis(),
            "Request rejected"
        );
        Err(error)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("session_header", &self.session_header)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn current_session(&self) -> Option<Session> {
        self.session.snapshot()
    }

    async fn register(&self, form: UserForm) -> Result<User> {
        crate::services::api::auth::register(self, form).await
    }

    async fn login(&self, login: &str, password: &str) -> Result<Session> {
        crate::services::api::auth::login(self, login, password).await
    }

    async fn logout(&self) -> Result<()> {
        crate::services::api::auth::logout(self).await
    }

    async fn update_user(&self, user_id: &str, form: UserForm) -> Result<User> {
        ApiClient::update_user(self, user_id, form).await
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        ApiClient::delete_user(self, user_id).await
    }

    async fn list_users(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<User>> {
        ApiClient::list_users(self, search, page).await
    }

    async fn search_users(&self, term: &str, page: Option<u32>) -> Result<Vec<User>> {
        ApiClient::search_users(self, term, page).await
    }

    async fn get_user(&self, login: &str) -> Result<User> {
        ApiClient::get_user(self, login).await
    }

    async fn follow(&self, login: &str) -> Result<Follower> {
        ApiClient::follow(self, login).await
    }

    async fn unfollow(&self, login: &str, follower_id: i64) -> Result<()> {
        ApiClient::unfollow(self, login, follower_id).await
    }

    async fn list_followers(&self, login: &str) -> Result<Vec<Follower>> {
        ApiClient::list_followers(self, login).await
    }

    async fn follow_status(&self, login: &str) -> Result<FollowStatus> {
        ApiClient::follow_status(self, login).await
    }

    async fn list_posts(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<Post>> {
        ApiClient::list_posts(self, search, page).await
    }

    async fn search_posts(&self, term: &str, page: Option<u32>) -> Result<Vec<Post>> {
        ApiClient::search_posts(self, term, page).await
    }

    async fn create_post(&self, message: &str) -> Result<Post> {
        ApiClient::create_post(self, message).await
    }

    async fn delete_post(&self, post_id: i64) -> Result<()> {
        ApiClient::delete_post(self, post_id).await
    }

    async fn reply_to_post(&self, post_id: i64, message: &str) -> Result<Reply> {
        ApiClient::reply_to_post(self, post_id, message).await
    }

    async fn list_replies(&self, post_id: i64) -> Result<Vec<Reply>> {
        ApiClient::list_replies(self, post_id).await
    }

    async fn like_post(&self, post_id: i64) -> Result<Like> {
        ApiClient::like_post(self, post_id).await
    }

    async fn unlike_post(&self, post_id: i64, like_id: i64) -> Result<()> {
        ApiClient::unlike_post(self, post_id, like_id).await
    }

    async fn list_likes(&self, post_id: i64) -> Result<Vec<Like>> {
        ApiClient::list_likes(self, post_id).await
    }
}
