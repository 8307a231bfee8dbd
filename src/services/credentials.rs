//! Session storage in the OS keychain.
//!
//! Stores the serialized session using the system's native credential
//! storage (Keychain on macOS, Credential Manager on Windows, Secret Service
//! on Linux). One entry per backend base URL.

use crate::error::AppError;
use crate::services::session::{decode_stored, Session, SessionStore};
use keyring::Entry;

/// Service name used in the keychain.
const SERVICE_NAME: &str = "hirelink";

/// Keychain-backed [`SessionStore`].
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    account: String,
}

impl KeyringSessionStore {
    /// Create a store keyed by the backend base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            account: normalize_url(base_url),
        }
    }

    fn entry(&self) -> Result<Entry, AppError> {
        Entry::new(SERVICE_NAME, &self.account).map_err(|e| {
            AppError::session_storage(format!("Failed to create keyring entry: {}", e))
        })
    }
}

impl SessionStore for KeyringSessionStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let entry = self.entry()?;

        let raw = match entry.get_password() {
            Ok(raw) => raw,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => {
                return Err(AppError::session_storage(format!(
                    "Failed to retrieve session: {}",
                    e
                )))
            }
        };

        Ok(decode_stored(&raw, "the keychain"))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let raw = serde_json::to_string(session)?;
        self.entry()?
            .set_password(&raw)
            .map_err(|e| AppError::session_storage(format!("Failed to store session: {}", e)))
    }

    /// Idempotent: deleting a missing entry is not an error.
    fn clear(&self) -> Result<(), AppError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AppError::session_storage(format!(
                "Failed to delete session: {}",
                e
            ))),
        }
    }
}

/// Normalize a URL for use as an account identifier.
///
/// Removes trailing slashes and converts to lowercase.
fn normalize_url(url: &str) -> String {
    url.trim_end_matches('/').to_lowercase()
}
