//! Client session: the bearer token and identity of the logged-in user.
//!
//! All reads and writes of the persisted keys (`access_token`,
//! `refresh_token`, `user_role`, `user_id`) go through [`SessionManager`].
//! The backing store is pluggable: a JSON file, the OS keychain, or memory.

use crate::error::AppError;
use crate::models::{LoginResponse, UserRole};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Persisted session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user_role: Option<UserRole>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl From<&LoginResponse> for Session {
    fn from(login: &LoginResponse) -> Self {
        Self {
            access_token: login.access_token.clone(),
            refresh_token: Some(login.refresh_token.clone()),
            user_role: Some(login.role),
            user_id: Some(login.user_id),
        }
    }
}

/// Storage backend for the session.
pub trait SessionStore: Send + Sync {
    /// Load the stored session, or `None` if nobody is logged in.
    fn load(&self) -> Result<Option<Session>, AppError>;

    /// Persist a session, replacing any previous one.
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Remove the stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), AppError>;
}

/// Session kept in process memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| AppError::session_storage("Session lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::session_storage("Session lock poisoned"))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| AppError::session_storage("Session lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

/// Session stored as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

/// Decode a stored session. Unreadable data means nobody is logged in, in
/// every backend.
pub(crate) fn decode_stored(raw: &str, source: &str) -> Option<Session> {
    match serde_json::from_str::<Session>(raw) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Ignoring unreadable session in {}: {}", source, e);
            None
        }
    }
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/hirelink/session.json`, or a relative fallback when the
    /// platform has no config directory.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hirelink")
            .join("session.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::session_storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        Ok(decode_stored(&raw, &self.path.display().to_string()))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::session_storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json).map_err(|e| {
            AppError::session_storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::session_storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// Single entry point for session reads and writes.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// In-memory manager, optionally pre-seeded.
    pub fn in_memory(session: Option<Session>) -> Self {
        let store = match session {
            Some(session) => MemorySessionStore::with_session(session),
            None => MemorySessionStore::new(),
        };
        Self::new(Arc::new(store))
    }

    pub fn load(&self) -> Result<Option<Session>, AppError> {
        self.store.load()
    }

    /// Persist the tokens and identity returned by a successful login.
    pub fn save_login(&self, login: &LoginResponse) -> Result<Session, AppError> {
        let session = Session::from(login);
        self.store.save(&session)?;
        log::info!("Session saved for user {} ({})", login.user_id, login.role);
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        self.store.save(session)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.clear()?;
        log::info!("Session cleared");
        Ok(())
    }

    /// The stored access token, if any. Empty tokens count as absent.
    ///
    /// A store that cannot be read is treated as logged out.
    pub fn access_token(&self) -> Option<String> {
        match self.store.load() {
            Ok(session) => session
                .map(|s| s.access_token)
                .filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Failed to load session: {}", e);
                None
            }
        }
    }

    /// The access token, or `NotAuthenticated`.
    pub fn require_token(&self) -> Result<String, AppError> {
        self.access_token().ok_or(AppError::NotAuthenticated)
    }

    pub fn role(&self) -> Option<UserRole> {
        self.store.load().ok().flatten().and_then(|s| s.user_role)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.load().ok().flatten().and_then(|s| s.refresh_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn login() -> LoginResponse {
        LoginResponse {
            message: None,
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            user_id: 42,
            role: UserRole::Recruiter,
        }
    }

    #[test]
    fn test_file_store_lifecycle() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);

        let session = Session::from(&login());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        // Idempotent
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_logged_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileSessionStore::new(path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_decode_stored_ignores_garbage() {
        let session = Session::from(&login());
        let raw = serde_json::to_string(&session).unwrap();
        assert_eq!(decode_stored(&raw, "test"), Some(session));
        assert_eq!(decode_stored("{\"access_token\": 3}", "test"), None);
        assert_eq!(decode_stored("", "test"), None);
    }

    #[test]
    fn test_manager_accessors() {
        let manager = SessionManager::in_memory(None);
        assert!(manager.access_token().is_none());
        assert!(manager.require_token().unwrap_err().is_not_authenticated());

        manager.save_login(&login()).unwrap();
        assert_eq!(manager.access_token().as_deref(), Some("access-1"));
        assert_eq!(manager.role(), Some(UserRole::Recruiter));
        assert_eq!(manager.load().unwrap().unwrap().user_id, Some(42));
        assert_eq!(manager.refresh_token().as_deref(), Some("refresh-1"));

        manager.clear().unwrap();
        assert!(manager.access_token().is_none());
        assert_eq!(manager.role(), None);
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let manager = SessionManager::in_memory(Some(Session {
            access_token: String::new(),
            refresh_token: None,
            user_role: None,
            user_id: None,
        }));
        assert!(manager.access_token().is_none());
    }
}
