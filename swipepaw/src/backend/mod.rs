//! # Backend Module
//!
//! Contains all non-UI logic for the Swipepaw application.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: swipe, match, conversation, and preference logic
//! - **Storage**: JSON blob persistence under the app data directory
//! - **Data**: the static candidate dataset
//!
//! The backend is UI-agnostic: a mobile shell, a desktop shell, or a test
//! harness can all drive it through [`AppState`].

pub mod data;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::domain::{
    AuthClient, ConversationService, MatchEvaluator, PreferenceService, SessionContext,
    SwipeSession,
};
use crate::backend::storage::{
    ConversationRepository, JsonConnection, MatchRepository, MatchStorage, PreferenceRepository,
};
use shared::Pet;

/// Main application state that holds all services
pub struct AppState {
    pub session_context: Arc<SessionContext>,
    pub conversation_service: ConversationService,
    pub preference_service: PreferenceService,
    match_repository: Arc<dyn MatchStorage>,
    candidates: Vec<Pet>,
}

impl AppState {
    /// Build a fresh swipe session over the candidate list.
    ///
    /// One session per run of the discover screen; the evaluator is passed
    /// in so callers control seeding.
    pub fn start_session(&self, evaluator: MatchEvaluator) -> SwipeSession {
        SwipeSession::new(
            self.candidates.clone(),
            evaluator,
            Arc::clone(&self.match_repository),
            self.conversation_service.clone(),
        )
    }

    /// All persisted swipe records, oldest first
    pub async fn match_history(&self) -> Result<Vec<shared::MatchRecord>> {
        self.match_repository.list_matches().await
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(
    connection: JsonConnection,
    auth_client: Arc<dyn AuthClient>,
) -> AppState {
    info!("Setting up repositories");
    let match_repository = Arc::new(MatchRepository::new(connection.clone()));
    let conversation_repository = Arc::new(ConversationRepository::new(connection.clone()));
    let preference_repository = Arc::new(PreferenceRepository::new(connection));

    info!("Setting up domain services");
    let conversation_service = ConversationService::new(conversation_repository);
    let preference_service = PreferenceService::new(preference_repository);
    let session_context = Arc::new(SessionContext::new(auth_client));

    AppState {
        session_context,
        conversation_service,
        preference_service,
        match_repository,
        candidates: data::sample_pets(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::AuthError;
    use async_trait::async_trait;
    use shared::{DecisionKind, UserIdentity};
    use tempfile::TempDir;

    struct StubAuthClient;

    #[async_trait]
    impl AuthClient for StubAuthClient {
        async fn sign_in(&self, email: &str, _password: &str) -> Result<UserIdentity, AuthError> {
            Ok(UserIdentity {
                user_id: format!("user::{}", email),
                email: email.to_string(),
            })
        }

        async fn sign_up(&self, email: &str, _password: &str) -> Result<UserIdentity, AuthError> {
            Ok(UserIdentity {
                user_id: format!("user::{}", email),
                email: email.to_string(),
            })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_backend_wires_services_over_shared_storage() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let app_state = initialize_backend(connection, Arc::new(StubAuthClient));

        app_state
            .session_context
            .sign_in("alex@example.com", "hunter2")
            .await
            .expect("Sign-in failed");
        assert!(app_state.session_context.is_authenticated());

        // Force every accept to match so the conversation side effect fires
        let mut session = app_state.start_session(MatchEvaluator::with_probability(1.0, 42));
        let first_pet_id = session.current().expect("no candidates").id.clone();
        session.decide(DecisionKind::Accept).await.expect("decide failed");

        let history = app_state.match_history().await.expect("history failed");
        assert_eq!(history.len(), 1);
        assert!(history[0].is_mutual);

        let conversations = app_state
            .conversation_service
            .list()
            .await
            .expect("list failed");
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].pet_id, first_pet_id);
    }
}
