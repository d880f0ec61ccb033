//! Session storage
//!
//! The access token and role are passed around through an explicit
//! `SessionStore` instead of ambient global state.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Result;
use crate::models::Session;

/// Capability to read, write and clear the stored session
pub trait SessionStore: Send + Sync {
    /// Read the stored session, `None` when anonymous
    fn get(&self) -> Result<Option<Session>>;

    /// Persist a session, replacing any previous one
    fn set(&self, session: &Session) -> Result<()>;

    /// Remove the stored session (logout)
    fn clear(&self) -> Result<()>;
}

/// JSON file backed session store
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let bytes = std::fs::read(&self.path)?;
        match serde_json::from_slice::<Session>(&bytes) {
            Ok(session) if session.has_token() => Ok(Some(session)),
            Ok(_) => Ok(None),
            Err(e) => {
                // A corrupt file reads as anonymous, like a missing key
                log::warn!("[session] Ignoring unreadable session file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn set(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.path, json)?;
        log::debug!("[session] Stored session at {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session store, mostly for tests
#[derive(Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<Session>> {
        let guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().filter(Session::has_token))
    }

    fn set(&self, session: &Session) -> Result<()> {
        let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.session.lock().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_set_get_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        store.set(&Session::new("tok-1", Role::Admin)).unwrap();
        let session = store.get().unwrap().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.role, Some(Role::Admin));

        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_file_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileSessionStore::new(path);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_non_utf8_file_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();
        let store = FileSessionStore::new(path);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_file_store_non_string_role_keeps_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"access_token":"tok","user_role":7}"#).unwrap();
        let store = FileSessionStore::new(path);
        let session = store.get().unwrap().unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.role, Some(Role::Unknown("7".to_string())));
    }

    #[test]
    fn test_file_store_empty_token_is_anonymous() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"access_token":"","user_role":"admin"}"#).unwrap();
        let store = FileSessionStore::new(path);
        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get().unwrap(), None);
        store.set(&Session::new("t", Role::Student)).unwrap();
        assert!(store.get().unwrap().is_some());
        store.clear().unwrap();
        assert_eq!(store.get().unwrap(), None);
    }
}
