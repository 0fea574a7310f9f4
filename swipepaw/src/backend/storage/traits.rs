//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use shared::{Conversation, MatchRecord, Preferences};

/// Trait defining the raw key-value persistence boundary
///
/// The durable store is an opaque string-keyed blob store: values are read
/// and written whole, there are no transactions, and an absent key on read
/// is `None`, never an error. Repositories serialize entire collections
/// through this interface.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the whole value for a key, or `None` if the key is absent
    async fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the whole value for a key, replacing any previous value
    async fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait defining the interface for swipe/match record storage
///
/// Records are an append-only sequence, not a set: re-deciding on a pet
/// stores a second record and no dedup is performed.
#[async_trait]
pub trait MatchStorage: Send + Sync {
    /// Append a new match record to the stored sequence
    async fn store_match(&self, record: &MatchRecord) -> Result<()>;

    /// List all match records in the order they were stored
    async fn list_matches(&self) -> Result<Vec<MatchRecord>>;
}

/// Trait defining the interface for conversation storage operations
#[async_trait]
pub trait ConversationStorage: Send + Sync {
    /// Retrieve the conversation for a specific pet, if one exists
    async fn get_conversation(&self, pet_id: &str) -> Result<Option<Conversation>>;

    /// Insert or replace the conversation for its pet
    async fn store_conversation(&self, conversation: &Conversation) -> Result<()>;

    /// List all conversations in unspecified order; callers sort for display
    async fn list_conversations(&self) -> Result<Vec<Conversation>>;
}

/// Trait defining the interface for the preferences singleton record
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    /// Retrieve the stored preferences, or `None` if never saved
    async fn get_preferences(&self) -> Result<Option<Preferences>>;

    /// Replace the whole preferences record
    async fn store_preferences(&self, preferences: &Preferences) -> Result<()>;
}
