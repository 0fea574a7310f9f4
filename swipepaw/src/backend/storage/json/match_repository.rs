//! # Match Repository
//!
//! Persists the append-only sequence of swipe decisions and their mutuality
//! outcomes under the `matches` key. Every append rewrites the whole
//! collection; there is no partial write.
//!
//! ## Stored format
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "matches": [
//!     { "pet_id": "1", "kind": "accept", "timestamp": 1737370800000, "is_mutual": false }
//!   ]
//! }
//! ```

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::MatchRecord;

use super::connection::JsonConnection;
use crate::backend::storage::MatchStorage;

const MATCHES_KEY: &str = "matches";
const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope for the match collection
#[derive(Debug, Serialize, Deserialize)]
struct MatchesFile {
    schema_version: u32,
    matches: Vec<MatchRecord>,
}

/// JSON-backed match record repository
#[derive(Clone)]
pub struct MatchRepository {
    connection: JsonConnection,
}

impl MatchRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<MatchRecord>> {
        match self.connection.read_key(MATCHES_KEY)? {
            Some(value) => {
                let file: MatchesFile = serde_json::from_str(&value)?;
                if file.schema_version != SCHEMA_VERSION {
                    anyhow::bail!(
                        "Unsupported matches schema version: {} (expected {})",
                        file.schema_version,
                        SCHEMA_VERSION
                    );
                }
                Ok(file.matches)
            }
            // Absent key means no swipes yet, not an error
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, matches: Vec<MatchRecord>) -> Result<()> {
        let file = MatchesFile {
            schema_version: SCHEMA_VERSION,
            matches,
        };
        let value = serde_json::to_string(&file)?;
        self.connection.write_key(MATCHES_KEY, &value)
    }
}

#[async_trait]
impl MatchStorage for MatchRepository {
    async fn store_match(&self, record: &MatchRecord) -> Result<()> {
        let mut matches = self.read_all()?;
        matches.push(record.clone());
        self.write_all(matches)?;

        info!(
            "Stored {} decision for pet {} (mutual: {})",
            record.kind, record.pet_id, record.is_mutual
        );
        Ok(())
    }

    async fn list_matches(&self) -> Result<Vec<MatchRecord>> {
        let matches = self.read_all()?;
        debug!("Loaded {} match records", matches.len());
        Ok(matches)
    }
}
