//! # Conversation Repository
//!
//! Persists all conversations under the `conversations` key. Each mutation
//! rewrites the entire collection, which is acceptable at this scale; the
//! single-writer assumption in the connection module is what makes the
//! read-modify-write cycle safe.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::Conversation;

use super::connection::JsonConnection;
use crate::backend::storage::ConversationStorage;

const CONVERSATIONS_KEY: &str = "conversations";
const SCHEMA_VERSION: u32 = 1;

/// On-disk envelope for the conversation collection
#[derive(Debug, Serialize, Deserialize)]
struct ConversationsFile {
    schema_version: u32,
    conversations: Vec<Conversation>,
}

/// JSON-backed conversation repository
#[derive(Clone)]
pub struct ConversationRepository {
    connection: JsonConnection,
}

impl ConversationRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Conversation>> {
        match self.connection.read_key(CONVERSATIONS_KEY)? {
            Some(value) => {
                let file: ConversationsFile = serde_json::from_str(&value)?;
                if file.schema_version != SCHEMA_VERSION {
                    anyhow::bail!(
                        "Unsupported conversations schema version: {} (expected {})",
                        file.schema_version,
                        SCHEMA_VERSION
                    );
                }
                Ok(file.conversations)
            }
            // No conversations saved yet
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, conversations: Vec<Conversation>) -> Result<()> {
        let count = conversations.len();
        let file = ConversationsFile {
            schema_version: SCHEMA_VERSION,
            conversations,
        };
        let value = serde_json::to_string(&file)?;
        self.connection.write_key(CONVERSATIONS_KEY, &value)?;

        debug!("Persisted {} conversations", count);
        Ok(())
    }
}

#[async_trait]
impl ConversationStorage for ConversationRepository {
    async fn get_conversation(&self, pet_id: &str) -> Result<Option<Conversation>> {
        let conversations = self.read_all()?;
        Ok(conversations.into_iter().find(|c| c.pet_id == pet_id))
    }

    async fn store_conversation(&self, conversation: &Conversation) -> Result<()> {
        let mut conversations = self.read_all()?;

        match conversations.iter_mut().find(|c| c.pet_id == conversation.pet_id) {
            Some(existing) => *existing = conversation.clone(),
            None => {
                info!("Creating conversation for pet {}", conversation.pet_id);
                conversations.push(conversation.clone());
            }
        }

        self.write_all(conversations)
    }

    async fn list_conversations(&self) -> Result<Vec<Conversation>> {
        self.read_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestEnvironment;
    use shared::{Message, MessageStatus};

    fn message(timestamp: i64, body: &str) -> Message {
        Message {
            id: Message::generate_id(timestamp),
            body: body.to_string(),
            timestamp,
            from_user: true,
            status: MessageStatus::Sent,
            attachments: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_conversation_is_none() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = ConversationRepository::new(env.connection.clone());

        let conversation = repository.get_conversation("1").await.expect("Failed to get");
        assert!(conversation.is_none());
    }

    #[tokio::test]
    async fn test_store_then_get() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = ConversationRepository::new(env.connection.clone());

        let conversation = Conversation::empty("1");
        repository.store_conversation(&conversation).await.expect("Failed to store");

        let loaded = repository.get_conversation("1").await.expect("Failed to get");
        assert_eq!(loaded, Some(conversation));
    }

    #[tokio::test]
    async fn test_store_replaces_existing_conversation() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = ConversationRepository::new(env.connection.clone());

        repository
            .store_conversation(&Conversation::empty("1"))
            .await
            .expect("Failed to store empty");

        let mut updated = Conversation::empty("1");
        let m = message(100, "Hi Luna!");
        updated.last_message_time = Some(m.timestamp);
        updated.messages.push(m);
        repository.store_conversation(&updated).await.expect("Failed to store updated");

        let all = repository.list_conversations().await.expect("Failed to list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], updated);
    }

    #[tokio::test]
    async fn test_collection_round_trips_field_for_field() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        let repository = ConversationRepository::new(env.connection.clone());

        let mut first = Conversation::empty("1");
        first.messages.push(Message {
            id: Message::generate_id(100),
            body: "Hello!".to_string(),
            timestamp: 100,
            from_user: true,
            status: MessageStatus::Sent,
            attachments: vec!["https://example.com/photo.jpeg".to_string()],
        });
        first.messages.push(Message {
            id: Message::generate_id(200),
            body: "Woof".to_string(),
            timestamp: 200,
            from_user: false,
            status: MessageStatus::Delivered,
            attachments: Vec::new(),
        });
        first.last_message_time = Some(200);
        let second = Conversation::empty("2");

        repository.store_conversation(&first).await.expect("Failed to store first");
        repository.store_conversation(&second).await.expect("Failed to store second");

        // Reload through a fresh repository to force a full deserialize
        let reloaded = ConversationRepository::new(env.connection.clone())
            .list_conversations()
            .await
            .expect("Failed to list");
        assert_eq!(reloaded, vec![first, second]);
    }

    #[tokio::test]
    async fn test_unknown_schema_version_is_an_error() {
        let env = TestEnvironment::new().await.expect("Failed to create test environment");
        env.connection
            .write_key(CONVERSATIONS_KEY, "{\"schema_version\":2,\"conversations\":[]}")
            .expect("Failed to seed file");

        let repository = ConversationRepository::new(env.connection.clone());
        assert!(repository.list_conversations().await.is_err());
    }
}
