//! # Post Data Transfer Objects
//!
//! Posts and the sub-resources attached to them (replies, likes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post owned by `user_login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub user_login: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A reply to a parent post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub id: i64,
    pub user_login: String,
    pub message: String,
    #[serde(default)]
    pub post_id: Option<i64>,
}

/// A like on a parent post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Like {
    pub id: i64,
    pub user_login: String,
    #[serde(default)]
    pub post_id: Option<i64>,
}

/// Message body shared by posts and replies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageForm {
    pub message: String,
}

/// `{ "post": { "message": ... } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostEnvelope {
    pub post: MessageForm,
}

/// `{ "reply": { "message": ... } }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyEnvelope {
    pub reply: MessageForm,
}

impl PostEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            post: MessageForm {
                message: message.into(),
            },
        }
    }
}

impl ReplyEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            reply: MessageForm {
                message: message.into(),
            },
        }
    }
}
