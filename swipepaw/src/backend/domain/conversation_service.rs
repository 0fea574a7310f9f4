//! # Conversation Service
//!
//! Durable per-pet message history. Conversations are created lazily: when
//! a mutual match is confirmed, or on first message if none exists yet.
//! They are never deleted in normal operation.
//!
//! Within one conversation, message order is the order appends complete,
//! which equals the user-observed causal order because the single active
//! session serializes them. No ordering is guaranteed across different
//! conversations beyond the cached last-message-time used for list sorting.

use anyhow::{bail, Result};
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::backend::storage::ConversationStorage;
use shared::{Conversation, Message, MessageStatus, SendMessageRequest};

/// Service for managing conversations with matched pets
#[derive(Clone)]
pub struct ConversationService {
    repository: Arc<dyn ConversationStorage>,
}

impl ConversationService {
    /// Create a new ConversationService
    pub fn new(repository: Arc<dyn ConversationStorage>) -> Self {
        Self { repository }
    }

    /// Return the conversation for a pet, creating and persisting an empty
    /// one if none exists. Idempotent: calling twice without intervening
    /// mutation returns the same empty conversation both times.
    pub async fn get_or_create(&self, pet_id: &str) -> Result<Conversation> {
        if let Some(existing) = self.repository.get_conversation(pet_id).await? {
            debug!("Found existing conversation for pet {}", pet_id);
            return Ok(existing);
        }

        let conversation = Conversation::empty(pet_id);
        self.repository.store_conversation(&conversation).await?;

        info!("Created conversation for pet {}", pet_id);
        Ok(conversation)
    }

    /// Append a user-originated message. Creates the conversation if the
    /// user messages a pet before any match bookkeeping has run.
    pub async fn send_message(&self, pet_id: &str, request: SendMessageRequest) -> Result<Message> {
        let body = request.body.trim();
        if body.is_empty() {
            bail!("Message body cannot be empty");
        }

        self.append_message(pet_id, body, true, MessageStatus::Sent, request.attachments)
            .await
    }

    /// Append a counterparty message (shelter or owner reply)
    pub async fn receive_message(&self, pet_id: &str, body: &str) -> Result<Message> {
        let body = body.trim();
        if body.is_empty() {
            bail!("Message body cannot be empty");
        }

        self.append_message(pet_id, body, false, MessageStatus::Delivered, Vec::new())
            .await
    }

    /// All messages for a pet in chronological order
    pub async fn messages(&self, pet_id: &str) -> Result<Vec<Message>> {
        let conversation = self.get_or_create(pet_id).await?;
        Ok(conversation.messages)
    }

    /// All conversations, most recently active first.
    /// Conversations that have no messages yet sort last.
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        let mut conversations = self.repository.list_conversations().await?;
        conversations.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));

        debug!("Listed {} conversations", conversations.len());
        Ok(conversations)
    }

    async fn append_message(
        &self,
        pet_id: &str,
        body: &str,
        from_user: bool,
        status: MessageStatus,
        attachments: Vec<String>,
    ) -> Result<Message> {
        let timestamp = Utc::now().timestamp_millis();
        let message = Message {
            id: Message::generate_id(timestamp),
            body: body.to_string(),
            timestamp,
            from_user,
            status,
            attachments,
        };

        let mut conversation = self.get_or_create(pet_id).await?;
        conversation.messages.push(message.clone());
        conversation.last_message_time = Some(message.timestamp);

        // Whole-collection rewrite; completes before the message is reported sent
        self.repository.store_conversation(&conversation).await?;

        info!(
            "Appended {} message to conversation with pet {}",
            if from_user { "outgoing" } else { "incoming" },
            pet_id
        );
        Ok(message)
    }
}
