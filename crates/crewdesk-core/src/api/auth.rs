//! Auth endpoint client.
//!
//! Login, logout and refresh are exempt from the retry-after-refresh
//! protocol and pass [`RetryPolicy::Passthrough`] at their call sites.
//! `GET /auth/me` is not exempt; a 401 there is the usual trigger for a
//! session refresh.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::client::{ApiClient, RetryPolicy};
use crate::api::ApiError;
use crate::models::User;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: User,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    user: User,
}

/// Auth API client.
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Authenticate with email and password. On success the backend sets
    /// the session cookie, which lands in the client's jar and rides every
    /// subsequent request. A rejected login is surfaced directly rather
    /// than triggering the refresh protocol.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.url("auth/login")?)
            .json(&LoginRequest { email, password })
            .build()?;
        let response = self.client.request(request, RetryPolicy::Passthrough).await?;
        let body: LoginResponse = ApiClient::into_json(response).await?;
        debug!(user = %body.user.email, "logged in");
        Ok(body)
    }

    /// End the session server-side. Callers typically tolerate failures
    /// here and proceed with client-side logout regardless.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self
            .client
            .http()
            .post(self.client.url("auth/logout")?)
            .build()?;
        let response = self.client.request(request, RetryPolicy::Passthrough).await?;
        ApiClient::check_response(response).await?;
        debug!("logged out");
        Ok(())
    }

    /// Fetch the currently authenticated user.
    pub async fn me(&self) -> Result<User, ApiError> {
        let body: MeResponse = self.client.get("auth/me").await?;
        Ok(body.user)
    }

    /// Force a session refresh, joining the in-flight attempt if one
    /// exists. Returns true if the backend renewed the session.
    pub async fn refresh(&self) -> bool {
        self.client.refresh_session().await
    }
}
