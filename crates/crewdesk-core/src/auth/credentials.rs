use keyring::Entry;

use crate::api::ApiError;

/// Keychain service name; entries are keyed by account email.
const SERVICE_NAME: &str = "crewdesk";

/// OS-keychain storage for the login password, so a client can
/// re-authenticate after the session cookie dies without prompting.
pub struct CredentialStore;

impl CredentialStore {
    /// Store the password for an account email in the OS keychain
    pub fn save(email: &str, password: &str) -> Result<(), ApiError> {
        let entry = Self::entry(email)?;
        entry
            .set_password(password)
            .map_err(|err| ApiError::Config(format!("failed to store password: {}", err)))
    }

    /// Retrieve the password for an account email
    pub fn password_for(email: &str) -> Result<String, ApiError> {
        let entry = Self::entry(email)?;
        entry
            .get_password()
            .map_err(|err| ApiError::Config(format!("no stored password: {}", err)))
    }

    /// Delete the stored password for an account email
    pub fn forget(email: &str) -> Result<(), ApiError> {
        let entry = Self::entry(email)?;
        entry
            .delete_credential()
            .map_err(|err| ApiError::Config(format!("failed to delete password: {}", err)))
    }

    /// Check whether a password is stored for an account email
    pub fn has_password(email: &str) -> bool {
        Self::entry(email)
            .map(|entry| entry.get_password().is_ok())
            .unwrap_or(false)
    }

    fn entry(email: &str) -> Result<Entry, ApiError> {
        Entry::new(SERVICE_NAME, email)
            .map_err(|err| ApiError::Config(format!("failed to open keychain entry: {}", err)))
    }
}
