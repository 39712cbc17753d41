//! # Test Support
//!
//! In-process stub of the microblog REST API plus a recording session store.
//!
//! The stub routes by hand from a single fallback handler, records every request
//! (method, path, query, session header, body), and keeps posts, replies, likes and
//! follow edges in memory. Tokens have the form `tok-<login>`; the stub derives the
//! acting user from the header.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use client::config::ClientConfig;
use client::services::api::ApiClient;
use client::session::{MemoryStore, SessionContext, SessionStore};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

pub const TOKEN_HEADER: &str = "x-session-token";
pub const PASSWORD: &str = "secret";
pub const FOLLOWER_USER_ID: i64 = 900;

/// One request as the stub saw it
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub token: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct Stub {
    pub requests: Mutex<Vec<Recorded>>,
    next_id: AtomicI64,
    posts: Mutex<Vec<Value>>,
    replies: Mutex<HashMap<i64, Vec<Value>>>,
    likes: Mutex<HashMap<i64, Vec<Value>>>,
    followers: Mutex<HashMap<String, Vec<Value>>>,
    rejections: Mutex<HashMap<(String, String), StatusCode>>,
}

impl Stub {
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("stub saw no request")
    }

    /// Answer every `method path` request with `status` from now on.
    pub fn reject(&self, method: &str, path: &str, status: StatusCode) {
        self.rejections
            .lock()
            .insert((method.to_string(), path.to_string()), status);
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Start the stub on an ephemeral port; returns its base URL.
pub async fn spawn_stub() -> (String, Arc<Stub>) {
    let stub = Arc::new(Stub::default());
    let app = Router::new().fallback(handle).with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    (format!("http://{addr}"), stub)
}

/// Client against `base_url` whose session lives in `store`.
pub fn client_with_store(base_url: &str, store: Arc<dyn SessionStore>) -> ApiClient {
    let session = Arc::new(SessionContext::load(store).expect("load session"));
    ApiClient::new(&ClientConfig::with_base_url(base_url), session).expect("build client")
}

/// Client against `base_url` with an empty in-memory session.
pub fn client(base_url: &str) -> ApiClient {
    client_with_store(base_url, Arc::new(MemoryStore::new()))
}

/// `SessionStore` that counts writes per key.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    pub writes: Mutex<HashMap<String, usize>>,
}

impl RecordingStore {
    pub fn writes_of(&self, key: &str) -> usize {
        self.writes.lock().get(key).copied().unwrap_or(0)
    }
}

impl SessionStore for RecordingStore {
    fn get(&self, key: &str) -> client::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> client::Result<()> {
        *self.writes.lock().entry(key.to_string()).or_default() += 1;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> client::Result<()> {
        self.inner.remove(key)
    }

    fn clear(&self) -> client::Result<()> {
        self.inner.clear()
    }
}

fn parse_query(uri: &Uri) -> Vec<(String, String)> {
    reqwest::Url::parse(&format!("http://stub{uri}"))
        .map(|url| {
            url.query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}

fn reply(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn unauthorized() -> Response {
    reply(StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" }))
}

fn not_found() -> Response {
    reply(StatusCode::NOT_FOUND, json!({ "error": "Not Found" }))
}

async fn handle(
    State(stub): State<Arc<Stub>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let path = uri.path().to_string();

    stub.requests.lock().push(Recorded {
        method: method.as_str().to_string(),
        path: path.clone(),
        query: parse_query(&uri),
        token: token.clone(),
        body: body.clone(),
    });

    let rejection = stub
        .rejections
        .lock()
        .get(&(method.as_str().to_string(), path.clone()))
        .copied();
    if let Some(status) = rejection {
        return reply(status, json!({ "error": status.canonical_reason() }));
    }

    let user = token
        .as_deref()
        .and_then(|t| t.strip_prefix("tok-"))
        .map(str::to_string);
    let search = parse_query(&uri)
        .into_iter()
        .find(|(k, _)| k == "search")
        .map(|(_, v)| v);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["users"]) => register(&stub, &body),
        ("POST", ["sessions"]) => login(&body),
        ("DELETE", ["sessions", _]) => match user {
            Some(_) => StatusCode::NO_CONTENT.into_response(),
            None => unauthorized(),
        },
        ("GET", ["users"]) => {
            let users = vec![
                json!({ "id": 1, "login": "alice", "name": "Alice" }),
                json!({ "id": 2, "login": "bob", "name": "Bob" }),
            ];
            let found: Vec<Value> = users
                .into_iter()
                .filter(|u| {
                    search
                        .as_deref()
                        .map_or(true, |s| u["login"].as_str().unwrap_or("").contains(s))
                })
                .collect();
            reply(StatusCode::OK, json!(found))
        }
        ("GET", ["users", "ghost"]) => not_found(),
        ("GET", ["users", login]) => reply(
            StatusCode::OK,
            json!({ "id": 2, "login": login, "name": login.to_uppercase(), "created_at": "2024-10-01T12:00:00Z" }),
        ),
        ("PATCH", ["users", id]) => match user {
            Some(_) => reply(
                StatusCode::OK,
                json!({ "id": id.parse::<i64>().ok(), "login": body["user"]["login"], "name": body["user"]["name"] }),
            ),
            None => unauthorized(),
        },
        ("DELETE", ["users", _]) => match user {
            Some(_) => StatusCode::NO_CONTENT.into_response(),
            None => unauthorized(),
        },
        ("GET", ["users", "ghost", "followers"]) => not_found(),
        ("GET", ["users", login, "followers"]) => {
            let edges = stub.followers.lock().get(*login).cloned().unwrap_or_default();
            reply(StatusCode::OK, json!(edges))
        }
        ("POST", ["users", login, "followers"]) => match user {
            Some(me) => {
                // Edge rows carry their own id and the follower's user id.
                let edge = json!({
                    "id": stub.next_id(),
                    "follower_id": FOLLOWER_USER_ID,
                    "follower_login": me,
                    "followed_login": login,
                });
                stub.followers
                    .lock()
                    .entry(login.to_string())
                    .or_default()
                    .push(edge.clone());
                reply(StatusCode::CREATED, edge)
            }
            None => unauthorized(),
        },
        ("DELETE", ["users", login, "followers", edge]) => {
            if user.is_none() {
                return unauthorized();
            }
            let edge: i64 = edge.parse().unwrap_or(-1);
            let mut followers = stub.followers.lock();
            let edges = followers.entry(login.to_string()).or_default();
            let before = edges.len();
            edges.retain(|e| e["id"].as_i64() != Some(edge));
            if edges.len() == before {
                not_found()
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        ("GET", ["posts"]) => {
            let posts: Vec<Value> = stub
                .posts
                .lock()
                .iter()
                .filter(|p| {
                    search
                        .as_deref()
                        .map_or(true, |s| p["message"].as_str().unwrap_or("").contains(s))
                })
                .cloned()
                .collect();
            reply(StatusCode::OK, json!(posts))
        }
        ("POST", ["posts"]) => match user {
            Some(me) => {
                let post = json!({
                    "id": stub.next_id(),
                    "user_login": me,
                    "message": body["post"]["message"],
                    "created_at": "2024-10-01T12:00:00Z",
                });
                stub.posts.lock().push(post.clone());
                reply(StatusCode::CREATED, post)
            }
            None => unauthorized(),
        },
        ("DELETE", ["posts", id]) => {
            let id: i64 = id.parse().unwrap_or(-1);
            let mut posts = stub.posts.lock();
            let before = posts.len();
            posts.retain(|p| p["id"].as_i64() != Some(id));
            if posts.len() == before {
                not_found()
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        ("POST", ["posts", id, "replies"]) => match user {
            Some(me) => {
                let post_id: i64 = id.parse().unwrap_or(-1);
                let created = json!({
                    "id": stub.next_id(),
                    "user_login": me,
                    "message": body["reply"]["message"],
                    "post_id": post_id,
                });
                stub.replies
                    .lock()
                    .entry(post_id)
                    .or_default()
                    .push(created.clone());
                reply(StatusCode::CREATED, created)
            }
            None => unauthorized(),
        },
        ("GET", ["posts", id, "replies"]) => {
            let post_id: i64 = id.parse().unwrap_or(-1);
            let replies = stub.replies.lock().get(&post_id).cloned().unwrap_or_default();
            reply(StatusCode::OK, json!(replies))
        }
        ("POST", ["posts", id, "likes"]) => match user {
            Some(me) => {
                let post_id: i64 = id.parse().unwrap_or(-1);
                let like = json!({ "id": stub.next_id(), "user_login": me, "post_id": post_id });
                stub.likes
                    .lock()
                    .entry(post_id)
                    .or_default()
                    .push(like.clone());
                reply(StatusCode::CREATED, like)
            }
            None => unauthorized(),
        },
        ("GET", ["posts", id, "likes"]) => {
            let post_id: i64 = id.parse().unwrap_or(-1);
            let likes = stub.likes.lock().get(&post_id).cloned().unwrap_or_default();
            reply(StatusCode::OK, json!(likes))
        }
        ("DELETE", ["posts", id, "likes", like]) => {
            let post_id: i64 = id.parse().unwrap_or(-1);
            let like_id: i64 = like.parse().unwrap_or(-1);
            let mut likes = stub.likes.lock();
            let entry = likes.entry(post_id).or_default();
            let before = entry.len();
            entry.retain(|l| l["id"].as_i64() != Some(like_id));
            if entry.len() == before {
                not_found()
            } else {
                StatusCode::NO_CONTENT.into_response()
            }
        }
        _ => not_found(),
    }
}

fn register(stub: &Stub, body: &Value) -> Response {
    let user = &body["user"];
    let login = user["login"].as_str().unwrap_or_default();

    if login == "taken" {
        return reply(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({
                "errors": {
                    "login": ["has already been taken"],
                    "password": ["is too short (minimum is 6 characters)"]
                }
            }),
        );
    }

    reply(
        StatusCode::CREATED,
        json!({
            "id": stub.next_id(),
            "login": login,
            "name": user["name"],
            "created_at": "2024-10-01T12:00:00Z",
        }),
    )
}

fn login(body: &Value) -> Response {
    let login = body["login"].as_str().unwrap_or_default();
    if body["password"].as_str() != Some(PASSWORD) {
        return reply(
            StatusCode::UNAUTHORIZED,
            json!({ "errors": { "base": ["Invalid login or password"] } }),
        );
    }

    reply(
        StatusCode::CREATED,
        json!({ "id": 42, "token": format!("tok-{login}"), "user_login": login }),
    )
}
