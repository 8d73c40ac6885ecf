//! Local persistence for small string preferences.
//!
//! The web build talks to `window.localStorage`; native builds keep a flat
//! JSON object in the platform data directory. Both sit behind
//! [`KeyValueStore`] so callers (and tests) can swap in [`MemoryStore`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored preferences are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("storage rejected write for `{0}`")]
    Rejected(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Used by tests and as a fallback when no backend exists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn open() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("unable to read `{key}`")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected(key.to_string()))
    }
}

/// JSON object file in the platform data directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalStore {
    const FILE_NAME: &'static str = "preferences.json";

    /// Store rooted in the per-user data directory. Falls back to the
    /// working directory if the platform gives us nothing.
    pub fn open() -> Self {
        let dir = directories::ProjectDirs::from("com", "Shellboard", "Shellboard")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::at(dir.join(Self::FILE_NAME))
    }

    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Current file contents plus one entry. Only a malformed file is discarded;
/// any other read failure aborts the write so existing keys survive.
#[cfg(not(target_arch = "wasm32"))]
fn merge_entry(
    current: Result<BTreeMap<String, String>, StorageError>,
    key: &str,
    value: &str,
) -> Result<BTreeMap<String, String>, StorageError> {
    let mut entries = match current {
        Ok(entries) => entries,
        Err(StorageError::Malformed(err)) => {
            tracing::warn!(%err, "replacing malformed preferences file");
            BTreeMap::new()
        }
        Err(err) => return Err(err),
    };
    entries.insert(key.to_string(), value.to_string());
    Ok(entries)
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let entries = merge_entry(self.read_all(), key, value)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_values() {
        let store = MemoryStore::new();
        assert!(store.get("darkMode").unwrap().is_none());
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
        store.set("darkMode", "false").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(store.len(), 1);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::at(dir.path().join("nested").join("prefs.json"));
        assert!(store.get("darkMode").unwrap().is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        LocalStore::at(&path).set("darkMode", "true").unwrap();
        LocalStore::at(&path).set("other", "1").unwrap();

        let reopened = LocalStore::at(&path);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("true"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("1"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reports_and_recovers_from_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = LocalStore::at(&path);
        assert!(matches!(store.get("darkMode"), Err(StorageError::Malformed(_))));

        store.set("darkMode", "false").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn io_failures_abort_the_write_instead_of_dropping_keys() {
        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let merged = merge_entry(Err(denied.into()), "darkMode", "true");
        assert!(matches!(merged, Err(StorageError::Io(_))));

        let malformed = serde_json::from_str::<BTreeMap<String, String>>("{").unwrap_err();
        let merged = merge_entry(Err(malformed.into()), "darkMode", "true").unwrap();
        assert_eq!(merged.len(), 1);

        let mut existing = BTreeMap::new();
        existing.insert("other".to_string(), "1".to_string());
        let merged = merge_entry(Ok(existing), "darkMode", "true").unwrap();
        assert_eq!(merged.get("other").map(String::as_str), Some("1"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn unreadable_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be reads as an i/o error.
        let path = dir.path().join("prefs.json");
        std::fs::create_dir(&path).unwrap();

        let store = LocalStore::at(&path);
        assert!(matches!(store.set("darkMode", "true"), Err(StorageError::Io(_))));
        assert!(path.is_dir());
    }

    #[test]
    fn shared_handles_see_the_same_entries() {
        let store = Rc::new(MemoryStore::new());
        let handle: Rc<dyn KeyValueStore> = store.clone();
        handle.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }
}
