//! # Preference Repository
//!
//! Persists the singleton preferences record under the `preferences` key.
//! The record is always replaced wholesale; no history is kept.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use shared::Preferences;

use super::connection::JsonConnection;
use crate::backend::storage::PreferenceStorage;

const PREFERENCES_KEY: &str = "preferences";
const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope for the preferences record
#[derive(Debug, Serialize, Deserialize)]
struct PreferencesFile {
    schema_version: u32,
    preferences: Preferences,
}

/// JSON-backed preference repository
#[derive(Clone)]
pub struct PreferenceRepository {
    connection: JsonConnection,
}

impl PreferenceRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl PreferenceStorage for PreferenceRepository {
    async fn get_preferences(&self) -> Result<Option<Preferences>> {
        match self.connection.read_key(PREFERENCES_KEY)? {
            Some(value) => {
                let file: PreferencesFile = serde_json::from_str(&value)?;
                if file.schema_version != SCHEMA_VERSION {
                    anyhow::bail!(
                        "Unsupported preferences schema version: {} (expected {})",
                        file.schema_version,
                        SCHEMA_VERSION
                    );
                }
                Ok(Some(file.preferences))
            }
            None => Ok(None),
        }
    }

    async fn store_preferences(&self, preferences: &Preferences) -> Result<()> {
        let file = PreferencesFile {
            schema_version: SCHEMA_VERSION,
            preferences: preferences.clone(),
        };
        let value = serde_json::to_string(&file)?;
        self.connection.write_key(PREFERENCES_KEY, &value)?;

        debug!("Persisted preferences record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_unsaved_preferences_are_none() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = PreferenceRepository::new(env.connection.clone());

        let preferences = repository.get_preferences().await.expect("Failed to get");
        assert!(preferences.is_none());
    }

    #[tokio::test]
    async fn test_store_then_get_round_trips() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = PreferenceRepository::new(env.connection.clone());

        let preferences = Preferences {
            pet_types: vec!["Cat".to_string()],
            age_min: 1,
            age_max: 5,
            max_distance: 50,
            notifications_enabled: false,
        };
        repository.store_preferences(&preferences).await.expect("Failed to store");

        let loaded = repository.get_preferences().await.expect("Failed to get");
        assert_eq!(loaded, Some(preferences));
    }

    #[tokio::test]
    async fn test_store_replaces_whole_record() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = PreferenceRepository::new(env.connection.clone());

        repository
            .store_preferences(&Preferences::default())
            .await
            .expect("Failed to store defaults");

        let mut updated = Preferences::default();
        updated.max_distance = 5;
        repository.store_preferences(&updated).await.expect("Failed to store update");

        let loaded = repository.get_preferences().await.expect("Failed to get");
        assert_eq!(loaded, Some(updated));
    }

    #[tokio::test]
    async fn test_unknown_schema_version_is_an_error() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        env.connection
            .write_key(
                PREFERENCES_KEY,
                "{\"schema_version\":7,\"preferences\":{\"pet_types\":[],\"age_min\":0,\"age_max\":1,\"max_distance\":1,\"notifications_enabled\":true}}",
            )
            .expect("Failed to seed file");

        let repository = PreferenceRepository::new(env.connection.clone());
        assert!(repository.get_preferences().await.is_err());
    }
}
