//! Core library for CrewDesk clients.
//!
//! CrewDesk is a multi-tenant employee-management platform; this crate is
//! the Rust client for its REST backend. It provides:
//!
//! - `api`: The session-aware `ApiClient` and typed endpoint clients for
//!   companies, departments, designations, employees, users and notices
//! - `auth`: Session state and OS-keychain credential storage
//! - `config`: Persisted client configuration
//! - `models`: Serde models for the backend's JSON
//!
//! Authentication is cookie-based. The client keeps the session alive
//! transparently: a 401 triggers one `POST /auth/refresh` (shared across
//! concurrent requests) and one retry of the failed request.
//!
//! # Example
//!
//! ```no_run
//! use crewdesk_core::api::{ApiClient, ListEmployeesQuery};
//!
//! # async fn example() -> Result<(), crewdesk_core::api::ApiError> {
//! let client = ApiClient::builder()
//!     .base_url("http://localhost:5000/api")
//!     .build()?;
//!
//! client.auth().login("admin@acme.test", "hunter2").await?;
//!
//! let page = client
//!     .employees()
//!     .list(&ListEmployeesQuery {
//!         search: Some("nair".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{} employees match", page.total);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError, ClientBuilder, RetryPolicy};
pub use auth::{CredentialStore, Session};
pub use config::Config;
