use serde::{Deserialize, Serialize};
use std::fmt;

/// A pet profile presented for swiping.
///
/// Pets are immutable reference data for the lifetime of a swipe session.
/// They are loaded whole from the static dataset at session start and are
/// never persisted themselves; only decisions about them are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    /// Age descriptor as shown on the card (e.g. "2 years", "6 months")
    pub age: String,
    /// Type of animal (e.g. "Dog", "Cat")
    pub species: String,
    /// Breed tag, if known (e.g. "Australian Shepherd")
    pub breed: Option<String>,
    pub description: String,
    /// One or more photo URLs; the first is the card photo
    pub photos: Vec<String>,
    /// Whether this pet is shelter-sourced or from a private owner
    pub is_shelter: bool,
    /// Shelter name, only present for shelter-sourced pets
    pub shelter_name: Option<String>,
    /// Whether the shelter has been verified
    pub shelter_verified: bool,
    /// Short label/value facts shown on the profile card
    pub facts: Vec<PetFact>,
}

/// A short label/value fact about a pet (e.g. "Energy" / "High")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetFact {
    pub label: String,
    pub value: String,
}

/// The kind of decision a swipe resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Left swipe - not interested
    Reject,
    /// Right swipe - interested
    Accept,
    /// Upward fling - strong interest
    SuperAccept,
}

impl DecisionKind {
    /// Whether this decision expresses interest in the pet
    pub fn is_accepting(&self) -> bool {
        matches!(self, DecisionKind::Accept | DecisionKind::SuperAccept)
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionKind::Reject => write!(f, "reject"),
            DecisionKind::Accept => write!(f, "accept"),
            DecisionKind::SuperAccept => write!(f, "super_accept"),
        }
    }
}

/// A single recorded swipe on one pet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeDecision {
    /// ID of the pet that was swiped on
    pub pet_id: String,
    pub kind: DecisionKind,
    /// When the swipe happened (milliseconds since epoch)
    pub timestamp: i64,
}

/// A persisted swipe decision together with its mutuality outcome.
///
/// Records are append-only: one per decision, never updated or deleted.
/// Re-deciding on the same pet produces a second record; no dedup is done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub pet_id: String,
    pub kind: DecisionKind,
    /// When the swipe happened (milliseconds since epoch)
    pub timestamp: i64,
    /// Whether the decision became a mutual match (enables messaging)
    pub is_mutual: bool,
}

impl MatchRecord {
    pub fn from_decision(decision: &SwipeDecision, is_mutual: bool) -> Self {
        MatchRecord {
            pet_id: decision.pet_id.clone(),
            kind: decision.kind,
            timestamp: decision.timestamp,
            is_mutual,
        }
    }
}

/// Delivery status of a message.
///
/// Status is set once at creation and never advanced by any in-app process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

/// Message ID in format: "message::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub body: String,
    /// When the message was created (milliseconds since epoch)
    pub timestamp: i64,
    /// Whether this message was sent by the user or the counterparty
    pub from_user: bool,
    pub status: MessageStatus,
    /// Attachment URLs, usually photos
    pub attachments: Vec<String>,
}

impl Message {
    /// Generate a message ID based on timestamp
    pub fn generate_id(epoch_millis: i64) -> String {
        format!("message::{}", epoch_millis)
    }

    /// Parse a message ID to extract the timestamp
    pub fn parse_id(id: &str) -> Result<i64, MessageIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 2 || parts[0] != "message" {
            return Err(MessageIdError::InvalidFormat);
        }

        parts[1]
            .parse::<i64>()
            .map_err(|_| MessageIdError::InvalidTimestamp)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MessageIdError {
    InvalidFormat,
    InvalidTimestamp,
}

impl fmt::Display for MessageIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageIdError::InvalidFormat => write!(f, "Invalid message ID format"),
            MessageIdError::InvalidTimestamp => write!(f, "Invalid timestamp in message ID"),
        }
    }
}

impl std::error::Error for MessageIdError {}

/// The message thread associated with one pet.
///
/// Keyed 1:1 by pet ID. Messages are append-only and stored in insertion
/// order, which equals chronological order because appends are serialized
/// by the single active session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub pet_id: String,
    pub messages: Vec<Message>,
    /// Timestamp of the most recent message, cached for list sorting.
    /// Unset until the first message is appended.
    pub last_message_time: Option<i64>,
}

impl Conversation {
    /// Create an empty conversation for a pet
    pub fn empty(pet_id: &str) -> Self {
        Conversation {
            pet_id: pet_id.to_string(),
            messages: Vec::new(),
            last_message_time: None,
        }
    }
}

/// User-chosen discovery filters.
///
/// A singleton record: any field change replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Acceptable species (e.g. ["Dog", "Cat"])
    pub pet_types: Vec<String>,
    /// Inclusive lower bound of acceptable pet age in years
    pub age_min: u32,
    /// Inclusive upper bound of acceptable pet age in years
    pub age_max: u32,
    /// Inclusive maximum distance in miles
    pub max_distance: u32,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            pet_types: vec!["Dog".to_string(), "Cat".to_string()],
            age_min: 0,
            age_max: 10,
            max_distance: 25,
            notifications_enabled: true,
        }
    }
}

/// The signed-in user, as reported by the authentication provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub email: String,
}

/// Request to append a user message to a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub body: String,
    /// Attachment URLs, usually photos
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<Conversation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePreferencesResponse {
    pub preferences: Preferences,
    pub success_message: String,
}
