use anyhow::*;
use directories_next::BaseDirs;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

pub trait ProgressStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.write().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

// One file per entry under the user data directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn open() -> Result<Self> {
        let mut root = BaseDirs::new()
            .context("could not locate system directories")?
            .data_dir()
            .to_path_buf();
        root.push("weekquiz");
        Ok(FileStore { root })
    }

    pub fn at(root: PathBuf) -> Self {
        FileStore { root }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl ProgressStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let result = fs::create_dir_all(&self.root).and_then(|_| fs::write(self.entry_path(key), value));
        if let Err(e) = result {
            log::warn!("Could not persist progress entry {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.entry_path(key));
    }
}
