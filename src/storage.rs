//! Durable client-side key-value storage
//!
//! Holds the credential returned by a successful sign-in under a fixed key.
//! The value is opaque: it is never parsed or validated here.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the sign-in credential is stored under
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}

/// Single-writer key-value store
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Persist a sign-in credential under [`TOKEN_KEY`]
pub fn store_credential(
    store: &dyn CredentialStore,
    credential: &SecretString,
) -> Result<(), StorageError> {
    store.set(TOKEN_KEY, credential.expose_secret())
}

/// True when a non-empty credential is stored; read failures count as absent
pub fn has_credential(store: &dyn CredentialStore) -> bool {
    match store.get(TOKEN_KEY) {
        Ok(value) => value.is_some_and(|v| !v.is_empty()),
        Err(err) => {
            tracing::warn!("Failed to read credential store: {err}");
            false
        }
    }
}

/// On-disk layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct StorageFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `storage.json` in the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("shop", "elegance", "elegance-tui")
            .map(|dirs| dirs.data_dir().join("storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StorageFile, StorageError> {
        if !self.path.exists() {
            return Ok(StorageFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, mut file: StorageFile) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        file.updated_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(&file)?;

        // Write a sibling and rename it over the store so readers never see
        // a partial file
        let tmp_path = self.path.with_extension("json.tmp");
        let result = write_private(&tmp_path, content.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result?;
        Ok(())
    }
}

/// Create or truncate `path` readable by the owner only (0600 on unix)
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.sync_all()
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read()?.entries.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut file = self.read()?;
        file.entries.insert(key.to_string(), value.to_string());
        self.write(file)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut file = self.read()?;
        if file.entries.remove(key).is_some() {
            self.write(file)?;
        }
        Ok(())
    }
}
