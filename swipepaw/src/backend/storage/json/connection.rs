//! # JSON Connection
//!
//! Manages the data directory and the raw read/write of whole JSON blobs,
//! one file per logical key:
//!
//! ```text
//! data/
//! ├── matches.json
//! ├── conversations.json
//! └── preferences.json
//! ```
//!
//! Writes go to a temp file first and are renamed into place, so a partial
//! write never corrupts the previous value. Reads of absent keys return
//! `None`; the repositories treat that as an empty collection or defaults.
//!
//! The store is a single shared mutable blob per key with no locking. The
//! read-modify-write pattern in the repositories is safe only because one
//! session writes at a time; input is serialized by the presentation layer.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::storage::KeyValueStore;

/// JsonConnection manages file paths and blob I/O for each logical key
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new JSON connection in the platform data directory
    /// (e.g. `~/.local/share/swipepaw` on Linux)
    pub fn new_default() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine platform data directory"))?
            .join("swipepaw");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Base directory holding the key files
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// File path backing a logical key
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_directory.join(format!("{}.json", key))
    }

    /// Read the whole value for a key, or `None` if its file does not exist
    pub fn read_key(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);

        if !path.exists() {
            debug!("Key '{}' absent ({})", key, path.display());
            return Ok(None);
        }

        let value = fs::read_to_string(&path)?;
        Ok(Some(value))
    }

    /// Write the whole value for a key, atomically replacing the previous one
    pub fn write_key(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        // Write to a temp file first, then rename into place
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        debug!("Wrote {} bytes to key '{}'", value.len(), key);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonConnection {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        self.read_key(key)
    }

    async fn write(&self, key: &str, value: &str) -> Result<()> {
        self.write_key(key, value)
    }
}
