// ABOUTME: JSON file key-value store with atomic replace on every write
// ABOUTME: Whole file is one JSON object of string keys to string values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PantryPal

use async_trait::async_trait;
use pantrypal_core::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// File-backed store
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash mid-write leaves the previous contents intact.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store at `path`; the file and its directory are created on first write
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> AppResult<Entries> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Entries::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::storage(format!(
                    "Store file {} is not a JSON object of strings: {e}",
                    self.path.display()
                ))
                .with_source(e)
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        let serialized = serde_json::to_string_pretty(entries)?;
        fs::write(&tmp_path, serialized).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), keys = entries.len(), "Wrote key-value store");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "json-file"
    }
}
