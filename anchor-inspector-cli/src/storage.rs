//! File-backed key-value store for the address book, and where it lives.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anchor_inspector_core::error::{InspectorError, InspectorResult};
use anchor_inspector_core::store::KeyValueStore;
use log::debug;

/// Directory override for inspector state.
pub const HOME_ENV: &str = "ANCHOR_INSPECTOR_HOME";

const STORE_FILE: &str = "addresses.json";

/// `$ANCHOR_INSPECTOR_HOME/addresses.json`, else `~/.anchor-inspector/addresses.json`.
pub fn default_store_path() -> PathBuf {
    if let Some(dir) = env::var_os(HOME_ENV) {
        return PathBuf::from(dir).join(STORE_FILE);
    }
    env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".anchor-inspector")
        .join(STORE_FILE)
}

/// A JSON object on disk, one string value per key.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> InspectorResult<BTreeMap<String, String>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(InspectorError::storage(format!("failed to read {}: {}", self.path.display(), e)))
            }
        };
        serde_json::from_str(&text)
            .map_err(|e| InspectorError::storage(format!("{} is not a JSON object of strings: {}", self.path.display(), e)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> InspectorResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> InspectorResult<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&values)
            .map_err(|e| InspectorError::storage(format!("failed to encode store: {}", e)))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| InspectorError::storage(format!("failed to create {}: {}", dir.display(), e)))?;
        }
        // Write to a sibling temp file, then rename over the target.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| InspectorError::storage(format!("failed to write {}: {}", self.path.display(), e)))?;
        debug!("wrote key {} to {}", key, self.path.display());
        Ok(())
    }
}
