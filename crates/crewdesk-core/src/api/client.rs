//! API client for communicating with the CrewDesk REST backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! API requests. Authentication rides an HttpOnly session cookie managed
//! by the client's cookie jar; the credential value is never read or
//! written by this code.
//!
//! When the backend answers 401, the client refreshes the session via
//! `POST /auth/refresh` and retries the original request exactly once.
//! Concurrent 401s share a single in-flight refresh call.

use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::{Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};
use url::Url;

use super::auth::AuthApi;
use super::companies::CompaniesApi;
use super::departments::DepartmentsApi;
use super::designations::DesignationsApi;
use super::employees::EmployeesApi;
use super::notices::NoticesApi;
use super::users::UsersApi;
use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Handle to the refresh attempt currently in flight. Cloned by every
/// caller that observes a 401 while the attempt is unresolved.
type RefreshHandle = Shared<BoxFuture<'static, bool>>;

/// Controls what happens when a request comes back 401.
///
/// Passed explicitly by the caller instead of matching request URLs
/// against an exemption list, so the exemption cannot drift from endpoint
/// paths. The auth endpoint clients (login, logout, refresh) pass
/// [`RetryPolicy::Passthrough`]: a rejected login must not trigger a
/// refresh, and the refresh call must not attempt to refresh itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Refresh the session and retry the request, each at most once.
    Refresh,
    /// Return the 401 response unmodified.
    Passthrough,
}

/// API client for the CrewDesk backend.
/// Clone is cheap - the HTTP client and refresh state are shared via Arc.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    /// Invariant: at most one refresh call is in flight process-wide.
    /// Holds the shared handle while an attempt is unresolved; cleared by
    /// the attempt itself, success or failure.
    refresh_inflight: Mutex<Option<RefreshHandle>>,
}

impl ApiClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ===== API accessors =====

    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    pub fn companies(&self) -> CompaniesApi {
        CompaniesApi::new(self.clone())
    }

    pub fn departments(&self) -> DepartmentsApi {
        DepartmentsApi::new(self.clone())
    }

    pub fn designations(&self) -> DesignationsApi {
        DesignationsApi::new(self.clone())
    }

    pub fn employees(&self) -> EmployeesApi {
        EmployeesApi::new(self.clone())
    }

    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    pub fn notices(&self) -> NoticesApi {
        NoticesApi::new(self.clone())
    }

    // ===== Core request path =====

    /// Execute a request, transparently handling session expiry.
    ///
    /// A non-401 response is returned as-is, whatever its status; HTTP
    /// errors are not converted into `Err` here. With
    /// [`RetryPolicy::Refresh`], a 401 triggers one session refresh
    /// (joining the in-flight attempt if one exists) and, if the refresh
    /// succeeds, one retry of the original request. The retried response
    /// is returned as-is even if it is 401 again. If the refresh fails,
    /// the original 401 response is returned unmodified.
    ///
    /// Only transport-level failures surface as `Err`.
    pub async fn request(
        &self,
        request: Request,
        policy: RetryPolicy,
    ) -> Result<Response, ApiError> {
        // A streaming body cannot be cloned for a retry; such a request is
        // treated like Passthrough.
        let retry_request = match policy {
            RetryPolicy::Refresh => request.try_clone(),
            RetryPolicy::Passthrough => None,
        };

        let response = self.inner.http.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        let Some(retry_request) = retry_request else {
            return Ok(response);
        };

        debug!(url = %retry_request.url(), "session expired, refreshing");
        if !self.refresh_session().await {
            warn!("session refresh failed, returning original response");
            return Ok(response);
        }

        // One retry only; a second 401 goes back to the caller.
        let retried = self.inner.http.execute(retry_request).await?;
        Ok(retried)
    }

    /// Wait for a session refresh, joining the in-flight attempt if one
    /// exists. Returns true if the backend renewed the session cookie.
    pub(crate) async fn refresh_session(&self) -> bool {
        let handle = {
            let mut slot = self.inner.refresh_inflight.lock().await;
            match slot.as_ref() {
                Some(handle) => {
                    debug!("joining in-flight session refresh");
                    handle.clone()
                }
                None => {
                    let handle = ClientInner::spawn_refresh(Arc::clone(&self.inner));
                    *slot = Some(handle.clone());
                    handle
                }
            }
        };
        handle.await
    }

    // ===== JSON helpers used by the endpoint clients =====

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ApiError> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(ApiError::from)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.inner.http.get(self.url(path)?).build()?;
        let response = self.request(request, RetryPolicy::Refresh).await?;
        Self::into_json(response).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.inner.http.get(self.url(path)?).query(query).build()?;
        let response = self.request(request, RetryPolicy::Refresh).await?;
        Self::into_json(response).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.inner.http.post(self.url(path)?).json(body).build()?;
        let response = self.request(request, RetryPolicy::Refresh).await?;
        Self::into_json(response).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.inner.http.put(self.url(path)?).json(body).build()?;
        let response = self.request(request, RetryPolicy::Refresh).await?;
        Self::into_json(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let request = self.inner.http.delete(self.url(path)?).build()?;
        let response = self.request(request, RetryPolicy::Refresh).await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Check if a response is successful, converting the backend error
    /// body into an `ApiError` if not.
    pub(crate) async fn check_response(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    /// Check a response and parse its JSON body.
    pub(crate) async fn into_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }
}

impl ClientInner {
    /// Start a refresh attempt on the runtime and hand back a joinable
    /// handle. The attempt runs to completion even if every caller
    /// awaiting it is dropped.
    fn spawn_refresh(inner: Arc<ClientInner>) -> RefreshHandle {
        let task = tokio::spawn(async move {
            let renewed = inner.call_refresh().await;
            // Clear the slot before resolving so the next 401 starts a
            // fresh attempt instead of joining a finished one.
            *inner.refresh_inflight.lock().await = None;
            renewed
        });
        async move { task.await.unwrap_or(false) }.boxed().shared()
    }

    /// POST the refresh endpoint. Success is judged solely by status
    /// class; transport failures count as a failed refresh, never an
    /// error.
    async fn call_refresh(&self) -> bool {
        let url = match self.base_url.join("auth/refresh") {
            Ok(url) => url,
            Err(err) => {
                warn!(error = %err, "invalid refresh URL");
                return false;
            }
        };

        match self.http.post(url).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("session refreshed");
                true
            }
            Ok(response) => {
                warn!(status = %response.status(), "session refresh rejected");
                false
            }
            Err(err) => {
                warn!(error = %err, "session refresh request failed");
                false
            }
        }
    }
}

/// Builder for creating an ApiClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: None,
        }
    }

    /// Set the base URL of the backend, e.g. `http://localhost:5000/api`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Config("base_url is required".to_string()))?;

        // Normalize so Url::join treats the last path segment as a
        // directory rather than replacing it.
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("crewdesk-core/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(ApiClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                refresh_inflight: Mutex::new(None),
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5000/api")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");

        let client = ClientBuilder::new()
            .base_url("http://localhost:5000/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:5000/api")
            .build()
            .unwrap();

        let url = client.url("employees").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/employees");

        let url = client.url("/auth/refresh").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/auth/refresh");
    }
}
