//! # Error Response Bodies
//!
//! Shape of the body the API sends when it rejects a request for validation reasons:
//!
//! ```text
//! HTTP/1.1 422 Unprocessable Entity
//!
//! { "errors": { "login": ["has already been taken"], "password": ["is too short"] } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name -> list of messages
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldErrors {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Every message of every field, in field order.
    pub fn messages(&self) -> Vec<&str> {
        self.errors
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
            .collect()
    }

    /// All messages joined with newlines, ready for an alert dialog.
    pub fn joined(&self) -> String {
        self.messages().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }
}
