//! # Storage Module
//!
//! Handles all data persistence for Swipepaw.
//!
//! The domain layer works against the traits in [`traits`]; the concrete
//! backend is a JSON blob store in [`json`]. Swapping the backend (a real
//! key-value database, cloud sync, etc.) would not touch the domain logic.
//!
//! The durable store owns matches, conversations, and preferences across
//! sessions. Candidate pet data is never persisted; it is static reference
//! data supplied at session start.

pub mod json;
pub mod traits;

// Re-export the main types that other modules need
pub use json::{ConversationRepository, JsonConnection, MatchRepository, PreferenceRepository};
pub use traits::{ConversationStorage, KeyValueStore, MatchStorage, PreferenceStorage};
