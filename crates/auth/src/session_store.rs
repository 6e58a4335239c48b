//! SessionStore - file-backed persistence of the session entries

use shared::{Result, Session};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File-backed store for the session entry map.
///
/// Login overwrites all entries in one write, logout clears them all, and
/// readers never mutate. A session has no expiry - it stays valid until
/// explicitly cleared.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current session; a missing store reads as logged out
    pub fn load(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::LoggedOut);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Session::from_entries(&entries))
    }

    /// Overwrite the store with the session's entries.
    ///
    /// All four keys are written together; saving a logged-out session
    /// leaves an empty entry map behind.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&session.to_entries())?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Remove every entry (logout)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::keys;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn test_missing_store_reads_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), Session::LoggedOut);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let session = Session::logged_in("meera", "plant_manager", "jwt");
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), session);
    }

    #[test]
    fn test_persisted_form_uses_exact_storage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Session::logged_in("u", "operator", "jwt"))
            .unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let entries: HashMap<String, String> = serde_json::from_str(&content).unwrap();

        for key in keys::ALL {
            assert!(entries.contains_key(key), "missing key {}", key);
        }
        assert_eq!(entries.get(keys::IS_AUTHENTICATED).unwrap(), "true");
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn test_clear_removes_all_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Session::logged_in("u", "admin", "jwt")).unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), Session::LoggedOut);
    }

    #[test]
    fn test_clear_on_empty_store_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".pdms/nested/session.json"));
        store.save(&Session::logged_in("u", "admin", "jwt")).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_login_fully_overwrites_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&Session::logged_in("old", "admin", "old-jwt"))
            .unwrap();
        store
            .save(&Session::logged_in("new", "operator", "new-jwt"))
            .unwrap();

        let session = store.load().unwrap();
        assert_eq!(session.username(), Some("new"));
        assert_eq!(session.raw_role(), Some("operator"));
        assert_eq!(session.token(), Some("new-jwt"));
    }

    #[test]
    fn test_tampered_flag_reads_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Session::logged_in("u", "admin", "jwt")).unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        let mut entries: HashMap<String, String> = serde_json::from_str(&content).unwrap();
        entries.insert(keys::IS_AUTHENTICATED.to_string(), "yes".to_string());
        std::fs::write(store.path(), serde_json::to_string(&entries).unwrap()).unwrap();

        assert_eq!(store.load().unwrap(), Session::LoggedOut);
    }
}
