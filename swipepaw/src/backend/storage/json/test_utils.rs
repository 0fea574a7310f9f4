//! Test utilities for the JSON storage backend.
//!
//! Provides an RAII test environment whose data directory is removed when
//! the environment is dropped, even if the test panics.

use anyhow::Result;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::JsonConnection;

/// RAII test environment that cleans up its data directory on drop
pub struct TestEnvironment {
    /// The temporary directory - kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    /// The JSON connection for the test
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
}

impl TestEnvironment {
    /// Create a new test environment with automatic cleanup
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }
}
