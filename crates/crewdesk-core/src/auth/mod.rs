//! Authentication state and credential storage.
//!
//! This module provides:
//! - `Session`: In-memory authenticated-session state (the credential
//!   itself is a cookie owned by the HTTP client)
//! - `CredentialStore`: Secure OS-level password storage via keyring

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::Session;
