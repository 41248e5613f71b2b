use super::ConfigStore;
use crate::error::{QueryDeckError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

const SETTINGS_FILENAME: &str = "settings.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(SETTINGS_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QueryDeckError::Io)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(QueryDeckError::Io)?;
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(QueryDeckError::Serialization)?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;

        let content =
            serde_json::to_string_pretty(entries).map_err(QueryDeckError::Serialization)?;

        // Atomic write
        let tmp_file = self
            .root
            .join(format!(".settings-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(QueryDeckError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.settings_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(QueryDeckError::Io(e));
        }

        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.load_entries()?;
        Ok(entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)?;
        debug!(key, "setting written");
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut stored = self.load_entries()?;
        for (key, value) in entries {
            stored.insert(key.to_string(), value.to_string());
        }
        self.save_entries(&stored)?;
        debug!(count = entries.len(), "settings written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.load_entries()?;
        if entries.remove(key).is_some() {
            self.save_entries(&entries)?;
            debug!(key, "setting removed");
        }
        Ok(())
    }
}
