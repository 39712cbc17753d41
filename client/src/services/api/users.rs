//! # User Endpoints
//!
//! Profile update and deletion, listing, search and lookup.

use super::auth::validate_user_form;
use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use lib_utils::validate_search_term;
use reqwest::Method;
use shared::{User, UserEnvelope, UserForm};

/// `search` / `page` query pairs, omitting what is unset.
pub(crate) fn list_query(search: Option<&str>, page: Option<u32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(search) = search {
        query.push(("search", search.to_string()));
    }
    if let Some(page) = page {
        query.push(("page", page.to_string()));
    }
    query
}

impl ApiClient {
    /// Update a user's profile.
    #[tracing::instrument(skip(self, form), fields(login = %form.login))]
    pub async fn update_user(&self, user_id: &str, form: UserForm) -> Result<User> {
        validate_user_form(&form)?;

        let request = UserEnvelope { user: form };
        self.send_json(
            "update_user",
            self.request(Method::PATCH, &["users", user_id]).json(&request),
        )
        .await
    }

    /// Delete a user account and wipe the local session store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.send_empty("delete_user", self.request(Method::DELETE, &["users", user_id]))
            .await?;

        self.session().wipe()?;
        tracing::info!("Account deleted");
        Ok(())
    }

    /// List users, optionally filtered.
    pub async fn list_users(&self, search: Option<&str>, page: Option<u32>) -> Result<Vec<User>> {
        self.send_json(
            "list_users",
            self.request(Method::GET, &["users"])
                .query(&list_query(search, page)),
        )
        .await
    }

    /// Search users by a non-blank term.
    #[tracing::instrument(skip(self))]
    pub async fn search_users(&self, term: &str, page: Option<u32>) -> Result<Vec<User>> {
        let term = validate_search_term(term).map_err(AppError::Validation)?;
        let users = self.list_users(Some(term), page).await?;
        tracing::debug!(count = users.len(), "User search finished");
        Ok(users)
    }

    /// Fetch a user by login.
    pub async fn get_user(&self, login: &str) -> Result<User> {
        self.send_json("get_user", self.request(Method::GET, &["users", login]))
            .await
    }
}
