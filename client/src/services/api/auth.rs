//! # Authentication Endpoints
//!
//! Registration, login and logout. Login and logout are the only operations with
//! local side effects: they write and clear the persisted session.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use lib_utils::{validate_matching, validate_not_empty};
use reqwest::Method;
use shared::{LoginRequest, Session, User, UserEnvelope, UserForm};

/// Check a registration/update form before sending it.
pub(crate) fn validate_user_form(form: &UserForm) -> Result<()> {
    validate_not_empty(&form.login, "Login").map_err(AppError::Validation)?;
    validate_not_empty(&form.name, "Name").map_err(AppError::Validation)?;
    validate_matching(&form.password, &form.password_confirmation, "Password")
        .map_err(AppError::Validation)?;
    Ok(())
}

/// Register a new user.
#[tracing::instrument(skip(client, form), fields(login = %form.login))]
pub async fn register(client: &ApiClient, form: UserForm) -> Result<User> {
    validate_user_form(&form)?;

    let request = UserEnvelope { user: form };
    let user: User = client
        .send_json("register", client.request(Method::POST, &["users"]).json(&request))
        .await?;

    tracing::info!(user_login = %user.login, "Registration successful");
    Ok(user)
}

/// Login with login and password, persisting the returned session.
#[tracing::instrument(skip(client, password), fields(login = %login))]
pub async fn login(client: &ApiClient, login: &str, password: &str) -> Result<Session> {
    if login.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Login and password required".to_string(),
        ));
    }

    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        login: login.to_string(),
        password: password.to_string(),
    };

    let session: Session = client
        .send_json("login", client.request(Method::POST, &["sessions"]).json(&request))
        .await?;

    client.session().establish(session.clone())?;

    tracing::info!(
        session_id = session.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(session)
}

/// Invalidate the current session remotely, then clear it locally.
///
/// The local session is only cleared once the service accepted the logout; use
/// [`SessionContext::clear`](crate::session::SessionContext::clear) to sign out
/// locally regardless.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    let session = client.session().snapshot().ok_or(AppError::NotAuthenticated)?;
    let session_id = session.id.to_string();

    client
        .send_empty(
            "logout",
            client.request(Method::DELETE, &["sessions", session_id.as_str()]),
        )
        .await?;

    client.session().clear()?;
    tracing::info!(user_login = %session.user_login, "Logged out");
    Ok(())
}
