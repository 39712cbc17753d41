//! # Feed Aggregation
//!
//! Loads a page of posts and, per post, its likes and replies.
//!
//! Per-post fetches run through `buffer_unordered(limit)`, so at most `limit` requests
//! are in flight. Results land in maps keyed by post id; completion order does not
//! matter and each post id is fetched at most once per kind. A failed per-post fetch
//! is logged and recorded in [`Feed::failures`]; the rest of the feed is kept.

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use futures::stream::{self, StreamExt};
use shared::{Like, Post, Reply};
use std::collections::{BTreeSet, HashMap};
use std::future::Future;

/// Which per-post fetch failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Likes,
    Replies,
}

/// A per-post fetch that failed while loading the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub post_id: i64,
    pub kind: FetchKind,
    pub message: String,
}

/// One page of posts with likes and replies keyed by post id
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub posts: Vec<Post>,
    pub likes: HashMap<i64, Vec<Like>>,
    pub replies: HashMap<i64, Vec<Reply>>,
    pub failures: Vec<FetchFailure>,
}

impl Feed {
    /// `login`'s like on `post_id`, if any.
    pub fn liked_by(&self, post_id: i64, login: &str) -> Option<&Like> {
        self.likes
            .get(&post_id)?
            .iter()
            .find(|like| like.user_login == login)
    }

    pub fn like_count(&self, post_id: i64) -> usize {
        self.likes.get(&post_id).map_or(0, Vec::len)
    }

    pub fn replies_for(&self, post_id: i64) -> &[Reply] {
        self.replies.get(&post_id).map_or(&[], Vec::as_slice)
    }

    /// Like `post_id` as the current user, or remove their like if present.
    ///
    /// Returns whether the post is liked afterwards. When the post's likes are not
    /// known (never fetched, or their fetch failed) they are fetched first; if that
    /// fails the error is returned and nothing is sent. The local like list is only
    /// updated after the service accepted the change.
    pub async fn toggle_like(&mut self, api: &dyn ApiService, post_id: i64) -> Result<bool> {
        let me = api
            .current_session()
            .ok_or(AppError::NotAuthenticated)?
            .user_login;

        if !self.likes_known(post_id) {
            let likes = api.list_likes(post_id).await?;
            self.likes.insert(post_id, likes);
            self.failures
                .retain(|f| !(f.post_id == post_id && f.kind == FetchKind::Likes));
        }

        match self.liked_by(post_id, &me).map(|like| like.id) {
            Some(like_id) => {
                api.unlike_post(post_id, like_id).await?;
                self.likes
                    .entry(post_id)
                    .or_default()
                    .retain(|like| like.id != like_id);
                Ok(false)
            }
            None => {
                let like = api.like_post(post_id).await?;
                self.likes.entry(post_id).or_default().push(like);
                Ok(true)
            }
        }
    }

    /// Whether the likes of `post_id` were fetched successfully.
    fn likes_known(&self, post_id: i64) -> bool {
        self.likes.contains_key(&post_id)
            && !self
                .failures
                .iter()
                .any(|f| f.post_id == post_id && f.kind == FetchKind::Likes)
    }
}

/// Which posts to load: an optional search term and page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl FeedQuery {
    pub fn page(page: u32) -> Self {
        Self {
            search: None,
            page: Some(page),
        }
    }
}

/// Load the posts selected by `query` with likes and replies for every post.
///
/// A search term goes through the same blank-term check as `search_posts`.
#[tracing::instrument(skip(api))]
pub async fn load_feed(api: &dyn ApiService, query: &FeedQuery, limit: usize) -> Result<Feed> {
    let posts = match query.search.as_deref() {
        Some(term) => api.search_posts(term, query.page).await?,
        None => api.list_posts(None, query.page).await?,
    };

    let ids: Vec<i64> = posts
        .iter()
        .map(|post| post.id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (likes, like_failures) = fetch_each(&ids, limit, FetchKind::Likes, move |id| api.list_likes(id)).await;
    let (replies, reply_failures) =
        fetch_each(&ids, limit, FetchKind::Replies, move |id| api.list_replies(id)).await;

    let failures: Vec<FetchFailure> = like_failures.into_iter().chain(reply_failures).collect();
    tracing::info!(
        posts = posts.len(),
        failures = failures.len(),
        "Feed loaded"
    );

    Ok(Feed {
        posts,
        likes,
        replies,
        failures,
    })
}

/// Run `fetch` for each id with at most `limit` in flight.
async fn fetch_each<T, F, Fut>(
    ids: &[i64],
    limit: usize,
    kind: FetchKind,
    fetch: F,
) -> (HashMap<i64, T>, Vec<FetchFailure>)
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut results = stream::iter(ids.iter().copied())
        .map(|id| {
            let pending = fetch(id);
            async move { (id, pending.await) }
        })
        .buffer_unordered(limit.max(1));

    let mut fetched = HashMap::with_capacity(ids.len());
    let mut failures = Vec::new();

    while let Some((post_id, result)) = results.next().await {
        match result {
            Ok(value) => {
                fetched.insert(post_id, value);
            }
            Err(e) => {
                tracing::warn!(post_id, ?kind, error = %e, "Per-post fetch failed");
                failures.push(FetchFailure {
                    post_id,
                    kind,
                    message: e.to_string(),
                });
            }
        }
    }

    (fetched, failures)
}
