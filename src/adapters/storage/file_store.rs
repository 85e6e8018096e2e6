//! File-backed Preference Store Adapter
//!
//! Persists all preference slots as one YAML document on disk. Every save
//! is a read-modify-write of the whole file; the value set is small enough
//! that this stays trivial.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::ports::{PreferenceStore, StoreError, StoreKey};

/// On-disk document: both slot maps keyed by the raw key strings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    dates: BTreeMap<String, Timestamp>,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the YAML file at `path`.
    ///
    /// The file is created on the first save; a missing file reads as an
    /// empty store.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    fn read_file(&self) -> Result<PreferenceFile, StoreError> {
        if !self.path.exists() {
            return Ok(PreferenceFile::default());
        }
        let yaml = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::Io(e.to_string()))?;
        serde_yaml::from_str(&yaml).map_err(|e| StoreError::DeserializationFailed {
            key: "preferences",
            reason: e.to_string(),
        })
    }

    fn write_file(&self, file: &PreferenceFile) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let yaml = serde_yaml::to_string(file).map_err(|e| StoreError::SerializationFailed {
            key: "preferences",
            reason: e.to_string(),
        })?;
        std::fs::write(&self.path, yaml).map_err(|e| StoreError::Io(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    fn load_date(&self, key: StoreKey) -> Result<Option<Timestamp>, StoreError> {
        Ok(self.read_file()?.dates.get(key.as_str()).copied())
    }

    fn save_date(&self, key: StoreKey, value: Timestamp) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        file.dates.insert(key.as_str().to_string(), value);
        self.write_file(&file)
    }

    fn load_string(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.read_file()?.strings.get(key.as_str()).cloned())
    }

    fn save_string(&self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        file.strings.insert(key.as_str().to_string(), value.to_string());
        self.write_file(&file)
    }

    fn remove(&self, key: StoreKey) -> Result<(), StoreError> {
        let mut file = self.read_file()?;
        file.dates.remove(key.as_str());
        file.strings.remove(key.as_str());
        self.write_file(&file)
    }
}
