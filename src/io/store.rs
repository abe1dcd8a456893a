use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A durable key-value byte store. The engine uses a single key and does
/// not interpret payloads here; absence and corruption are handled a
/// level up, in the snapshot codec.
pub trait KeyValueStore {
    /// Read the payload for `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    /// Replace the whole payload for `key`.
    fn set(&mut self, key: &str, bytes: &[u8]) -> io::Result<()>;
}

/// File-backed store: each key is a file under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        // write to a temp file in the same directory, then rename, so a
        // crash mid-write never leaves a torn snapshot behind
        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("state.json", b"payload").unwrap();
        assert_eq!(store.get("state.json"), Some(b"payload".to_vec()));
    }

    #[test]
    fn file_store_missing_key_is_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn file_store_creates_root_on_write() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.set("k", b"v").unwrap();
        assert_eq!(store.get("k"), Some(b"v".to_vec()));
    }

    #[test]
    fn file_store_overwrites_whole_payload() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("k", b"long old payload").unwrap();
        store.set("k", b"new").unwrap();
        assert_eq!(store.get("k"), Some(b"new".to_vec()));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert!(store.get("k").is_none());
        store.set("k", b"v").unwrap();
        assert_eq!(store.get("k"), Some(b"v".to_vec()));
    }
}
