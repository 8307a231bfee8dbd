//! Client settings.
//!
//! Read from the process environment, with an optional `.env` file loaded
//! first. Every key has a default so an empty environment works against a
//! local backend.

use crate::error::AppError;
use crate::services::api_client::{ClientConfig, DEFAULT_BASE_URL};
use crate::services::credentials::KeyringSessionStore;
use crate::services::session::{FileSessionStore, MemorySessionStore, SessionManager, SessionStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

const BASE_URL_KEY: &str = "HIRELINK_API_BASE_URL";
const TIMEOUT_KEY: &str = "HIRELINK_TIMEOUT_SECS";
const SESSION_BACKEND_KEY: &str = "HIRELINK_SESSION_BACKEND";
const SESSION_FILE_KEY: &str = "HIRELINK_SESSION_FILE";

/// Where the session is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    File,
    Keyring,
    Memory,
}

impl std::str::FromStr for SessionBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "keyring" | "keychain" => Ok(Self::Keyring),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::invalid_input_field(
                format!("Unknown session backend '{}'", other),
                SESSION_BACKEND_KEY,
            )),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    pub session_backend: SessionBackend,
    pub session_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            session_backend: SessionBackend::File,
            session_file: FileSessionStore::default_path(),
        }
    }
}

impl Settings {
    /// Load settings from `.env` (if present) and the environment.
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                log::warn!("Failed to load .env: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let base_url = get(BASE_URL_KEY).unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::invalid_input_field(
                format!("Base URL must start with http:// or https://, got '{}'", base_url),
                BASE_URL_KEY,
            ));
        }

        let timeout_secs = get(TIMEOUT_KEY)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    AppError::invalid_input_field(format!("Invalid timeout '{}'", raw), TIMEOUT_KEY)
                })
            })
            .transpose()?;

        let session_backend = match get(SESSION_BACKEND_KEY) {
            Some(raw) => raw.parse()?,
            None => defaults.session_backend,
        };

        let session_file = get(SESSION_FILE_KEY)
            .map(PathBuf::from)
            .unwrap_or(defaults.session_file);

        Ok(Self {
            base_url,
            timeout_secs,
            session_backend,
            session_file,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Build the session manager for the configured backend.
    pub fn session_manager(&self) -> SessionManager {
        let store: Arc<dyn SessionStore> = match self.session_backend {
            SessionBackend::File => Arc::new(FileSessionStore::new(&self.session_file)),
            SessionBackend::Keyring => Arc::new(KeyringSessionStore::new(&self.base_url)),
            SessionBackend::Memory => Arc::new(MemorySessionStore::new()),
        };
        SessionManager::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.base_url, "http://localhost:8000");
        assert_eq!(settings.timeout_secs, None);
        assert_eq!(settings.session_backend, SessionBackend::File);
        assert!(settings.session_file.ends_with("hirelink/session.json"));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            ("HIRELINK_API_BASE_URL", "https://hirelink.example.com/api"),
            ("HIRELINK_TIMEOUT_SECS", "15"),
            ("HIRELINK_SESSION_BACKEND", "Keychain"),
            ("HIRELINK_SESSION_FILE", "/tmp/s.json"),
        ]))
        .unwrap();
        assert_eq!(settings.base_url, "https://hirelink.example.com/api");
        assert_eq!(settings.timeout_secs, Some(15));
        assert_eq!(settings.session_backend, SessionBackend::Keyring);
        assert_eq!(settings.session_file, PathBuf::from("/tmp/s.json"));
        assert_eq!(settings.client_config().timeout_secs, Some(15));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let settings = Settings::from_lookup(lookup(&[("HIRELINK_TIMEOUT_SECS", "  ")])).unwrap();
        assert_eq!(settings.timeout_secs, None);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = Settings::from_lookup(lookup(&[("HIRELINK_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput { field: Some(ref f), .. } if f == "HIRELINK_TIMEOUT_SECS"
        ));

        let err = Settings::from_lookup(lookup(&[("HIRELINK_API_BASE_URL", "localhost")])).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidInput { field: Some(ref f), .. } if f == "HIRELINK_API_BASE_URL"
        ));

        assert!(Settings::from_lookup(lookup(&[("HIRELINK_SESSION_BACKEND", "redis")])).is_err());
    }
}
