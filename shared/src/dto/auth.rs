use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Session returned by a successful login.
///
/// The token is an opaque credential; the client never inspects or expires it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub token: String,
    pub user_login: String,
}
