//! # Preference Service
//!
//! The user's discovery filters: a single mutable record replaced wholesale
//! on every change. Out-of-range numeric input is silently clamped to the
//! declared bounds, never rejected with an error.

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::backend::storage::PreferenceStorage;
use shared::{Preferences, UpdatePreferencesResponse};

/// Inclusive bounds for the pet age range filter, in years
pub const AGE_BOUNDS: (u32, u32) = (0, 20);

/// Inclusive bounds for the max distance filter, in miles
pub const DISTANCE_BOUNDS: (u32, u32) = (1, 100);

/// Service for the user's discovery preferences
#[derive(Clone)]
pub struct PreferenceService {
    repository: Arc<dyn PreferenceStorage>,
}

impl PreferenceService {
    /// Create a new PreferenceService
    pub fn new(repository: Arc<dyn PreferenceStorage>) -> Self {
        Self { repository }
    }

    /// Current preferences; a never-saved record yields the defaults
    pub async fn get(&self) -> Result<Preferences> {
        match self.repository.get_preferences().await? {
            Some(preferences) => Ok(preferences),
            None => {
                debug!("No preferences saved yet, using defaults");
                Ok(Preferences::default())
            }
        }
    }

    /// Replace the whole preferences record.
    ///
    /// Numeric fields are clamped to their declared bounds and an inverted
    /// age range is swapped before the record is persisted. Returns the
    /// record as stored.
    pub async fn set(&self, preferences: Preferences) -> Result<UpdatePreferencesResponse> {
        let preferences = Self::clamp(preferences);

        self.repository.store_preferences(&preferences).await?;

        info!(
            "Updated preferences: types={:?}, age {}-{}, distance {} mi",
            preferences.pet_types, preferences.age_min, preferences.age_max, preferences.max_distance
        );

        Ok(UpdatePreferencesResponse {
            preferences,
            success_message: "Preferences updated successfully".to_string(),
        })
    }

    fn clamp(mut preferences: Preferences) -> Preferences {
        preferences.age_min = preferences.age_min.clamp(AGE_BOUNDS.0, AGE_BOUNDS.1);
        preferences.age_max = preferences.age_max.clamp(AGE_BOUNDS.0, AGE_BOUNDS.1);
        if preferences.age_min > preferences.age_max {
            std::mem::swap(&mut preferences.age_min, &mut preferences.age_max);
        }

        preferences.max_distance = preferences
            .max_distance
            .clamp(DISTANCE_BOUNDS.0, DISTANCE_BOUNDS.1);

        preferences
    }
}
