//! # Follow Data Transfer Objects

use serde::{Deserialize, Serialize};

/// Follow edge `follower_login -> followed user`.
///
/// `follower_id` is the id of the relation record, which is what
/// `DELETE /users/:login/followers/:followerId` expects. Records may carry the
/// edge id as `id`, as `follower_id`, or both; `id` wins when both are present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "FollowerRecord")]
pub struct Follower {
    pub follower_id: i64,
    pub follower_login: String,
}

/// Follower record as the service sends it
#[derive(Deserialize)]
struct FollowerRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    follower_id: Option<i64>,
    follower_login: String,
}

impl TryFrom<FollowerRecord> for Follower {
    type Error = String;

    fn try_from(record: FollowerRecord) -> Result<Self, Self::Error> {
        let follower_id = record
            .id
            .or(record.follower_id)
            .ok_or_else(|| "follower record has neither `id` nor `follower_id`".to_string())?;

        Ok(Follower {
            follower_id,
            follower_login: record.follower_login,
        })
    }
}
