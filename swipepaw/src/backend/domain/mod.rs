//! # Domain Module
//!
//! Contains all business logic for Swipepaw.
//!
//! ## Module Organization
//!
//! - **swipe_session**: cursor over the candidate list and decision recording
//! - **gesture**: translation of finished drag gestures into decisions
//! - **match_evaluator**: mutual-match rule for accepting decisions
//! - **conversation_service**: per-pet message history
//! - **preference_service**: discovery filter record with clamping
//! - **auth_service**: auth provider boundary and session context
//!
//! ## Core Concepts
//!
//! - **Candidate**: a pet profile presented for swiping
//! - **Swipe Decision**: a recorded reject/accept/super-accept on one pet
//! - **Match**: an accepting decision confirmed mutual
//! - **Conversation**: the message thread associated with one pet
//! - **Session**: the in-memory iteration state over the candidate list for
//!   one run of the discover screen

pub mod auth_service;
pub mod conversation_service;
pub mod gesture;
pub mod match_evaluator;
pub mod preference_service;
pub mod swipe_session;

pub use auth_service::{AuthClient, AuthError, SessionContext};
pub use conversation_service::ConversationService;
pub use gesture::{resolve_gesture, SwipeGesture};
pub use match_evaluator::{MatchEvaluator, MUTUAL_MATCH_PROBABILITY};
pub use preference_service::PreferenceService;
pub use swipe_session::{DecideOutcome, SwipeSession};
