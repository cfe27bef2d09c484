//! Key-value areas backing the template store

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use super::StoreError;

/// A durable string key-value medium
pub trait KeyValueArea {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process area, mostly useful for tests and previews
#[derive(Debug, Default, Clone)]
pub struct MemoryArea {
    items: BTreeMap<String, String>,
}

impl MemoryArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|k| k.as_str())
    }
}

impl KeyValueArea for MemoryArea {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

/// Area storing one file per key inside a directory
#[derive(Debug, Clone)]
pub struct DirectoryArea {
    root: PathBuf,
}

impl DirectoryArea {
    /// The directory is created on first write
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key to a file inside the root, never escaping it
    ///
    /// ASCII letters, digits, `-` and `.` are kept; every other byte,
    /// including `_`, becomes `_xx` in lowercase hex. Distinct keys always
    /// map to distinct files.
    fn path_for(&self, key: &str) -> PathBuf {
        let mut file = String::with_capacity(key.len() + 5);
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'.' {
                file.push(char::from(byte));
            } else {
                file.push_str(&format!("_{:02x}", byte));
            }
        }
        file.push_str(".json");
        self.root.join(file)
    }
}

impl KeyValueArea for DirectoryArea {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
