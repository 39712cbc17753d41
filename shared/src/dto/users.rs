//! # User Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User as returned by the API. The password is write-only and never present here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub login: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Registration and profile-update form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserForm {
    pub login: String,
    pub name: String,
    pub password: String,
    pub password_confirmation: String,
}

/// `{ "user": { ... } }` envelope used by register and update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEnvelope {
    pub user: UserForm,
}
