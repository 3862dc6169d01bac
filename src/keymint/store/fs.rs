use super::PrefStore;
use crate::error::{KeymintError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const PREFS_FILENAME: &str = "prefs.json";

/// File-backed preference store. Preferences live in a single `prefs.json`
/// (a flat string-to-string JSON object) under the given root directory.
/// The file and directory are created lazily on first write.
pub struct FilePrefs {
    root: PathBuf,
}

impl FilePrefs {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prefs_path(&self) -> PathBuf {
        self.root.join(PREFS_FILENAME)
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let path = self.prefs_path();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(path).map_err(KeymintError::Io)?;
        let values = serde_json::from_str(&content).map_err(KeymintError::Serialization)?;
        Ok(values)
    }

    fn save(&self, values: &HashMap<String, String>) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KeymintError::Io)?;
        }
        let content = serde_json::to_string_pretty(values).map_err(KeymintError::Serialization)?;
        fs::write(self.prefs_path(), content).map_err(KeymintError::Io)?;
        Ok(())
    }
}

impl PrefStore for FilePrefs {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.load()?;
        Ok(values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }
}
