//! # Swipe Session
//!
//! Iterates the candidate list for one run of the discover screen: presents
//! one pet at a time, turns a decision into a persisted record, and advances
//! the cursor. The session owns the cursor and the in-memory decision log
//! for its lifetime; the durable store owns the records across sessions.
//!
//! Exhaustion is terminal: once the cursor passes the end of the list the
//! session never wraps back, and further decisions are no-ops.
//!
//! The cursor is single-writer within one session. The presentation layer
//! serializes input, gating each decision on completion of the previous
//! one's animation and persistence, so `decide` taking `&mut self` is the
//! whole concurrency story.

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::backend::domain::conversation_service::ConversationService;
use crate::backend::domain::gesture::{resolve_gesture, SwipeGesture};
use crate::backend::domain::match_evaluator::MatchEvaluator;
use crate::backend::storage::MatchStorage;
use shared::{DecisionKind, MatchRecord, Pet, SwipeDecision};

/// Result of a single call to [`SwipeSession::decide`]
#[derive(Debug, Clone, PartialEq)]
pub enum DecideOutcome {
    /// A decision was recorded and the cursor advanced
    Decided {
        decision: SwipeDecision,
        /// Whether the decision became a mutual match (drives the match modal)
        is_mutual: bool,
    },
    /// The session was already exhausted; nothing was recorded
    Exhausted,
}

/// One run of the discover screen over a fixed, ordered candidate list
pub struct SwipeSession {
    candidates: Vec<Pet>,
    cursor: usize,
    decisions: Vec<SwipeDecision>,
    evaluator: MatchEvaluator,
    match_repository: Arc<dyn MatchStorage>,
    conversation_service: ConversationService,
}

impl SwipeSession {
    /// Create a new session over a candidate list
    pub fn new(
        candidates: Vec<Pet>,
        evaluator: MatchEvaluator,
        match_repository: Arc<dyn MatchStorage>,
        conversation_service: ConversationService,
    ) -> Self {
        info!("Starting swipe session with {} candidates", candidates.len());
        Self {
            candidates,
            cursor: 0,
            decisions: Vec::new(),
            evaluator,
            match_repository,
            conversation_service,
        }
    }

    /// The pet currently presented, or `None` when the session is exhausted
    pub fn current(&self) -> Option<&Pet> {
        self.candidates.get(self.cursor)
    }

    /// Whether the cursor has passed the end of the candidate list
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    /// Candidates not yet decided on
    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor)
    }

    /// Decisions made so far this session, in call order
    pub fn decisions(&self) -> &[SwipeDecision] {
        &self.decisions
    }

    /// Record a decision on the current pet and advance the cursor.
    ///
    /// The record is persisted, and on a mutual match the conversation is
    /// created, before any in-memory state changes; a failed write leaves
    /// the session exactly where it was and the error propagates.
    pub async fn decide(&mut self, kind: DecisionKind) -> Result<DecideOutcome> {
        let Some(pet) = self.candidates.get(self.cursor).cloned() else {
            debug!("Decision on exhausted session ignored");
            return Ok(DecideOutcome::Exhausted);
        };

        let decision = SwipeDecision {
            pet_id: pet.id.clone(),
            kind,
            timestamp: Utc::now().timestamp_millis(),
        };
        let is_mutual = self.evaluator.evaluate(&pet, kind);

        let record = MatchRecord::from_decision(&decision, is_mutual);
        self.match_repository.store_match(&record).await?;

        if is_mutual {
            info!("Mutual match with {} ({})", pet.name, pet.id);
            self.conversation_service.get_or_create(&pet.id).await?;
        }

        self.decisions.push(decision.clone());
        self.cursor += 1;

        Ok(DecideOutcome::Decided { decision, is_mutual })
    }

    /// Resolve a finished drag gesture and record the decision it commits to.
    ///
    /// Returns `Ok(None)` when the gesture did not commit (the card springs
    /// back and nothing is recorded).
    pub async fn decide_from_gesture(
        &mut self,
        gesture: SwipeGesture,
        card_width: f32,
    ) -> Result<Option<DecideOutcome>> {
        match resolve_gesture(gesture, card_width) {
            Some(kind) => Ok(Some(self.decide(kind).await?)),
            None => Ok(None),
        }
    }
}
