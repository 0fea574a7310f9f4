//! # JSON Storage Module
//!
//! This module provides a file-based storage implementation over whole-value
//! JSON blobs, one file per logical key under the app's data directory. It is
//! the on-device analog of a mobile key-value store: read whole value, write
//! whole value, no transactions.
//!
//! ## Components
//!
//! - **connection.rs** - data directory management and atomic blob I/O
//! - **match_repository.rs** - append-only swipe/match records (`matches` key)
//! - **conversation_repository.rs** - per-pet message threads (`conversations` key)
//! - **preference_repository.rs** - singleton preferences record (`preferences` key)
//!
//! Every persisted collection carries an explicit `schema_version` field so
//! the format can evolve without silently misreading old data.

pub mod connection;
pub mod conversation_repository;
pub mod match_repository;
pub mod preference_repository;

#[cfg(test)]
pub mod test_utils;

// Re-export the main types for external use
pub use connection::JsonConnection;
pub use conversation_repository::ConversationRepository;
pub use match_repository::MatchRepository;
pub use preference_repository::PreferenceRepository;
