//! # Auth Service
//!
//! Boundary to the external authentication provider. The provider itself is
//! not implemented here; the domain consumes it through the [`AuthClient`]
//! trait and distinguishes only the error kinds it needs for user messaging.
//!
//! Access to the swipe/conversation/preference surfaces is gated on the
//! current identity, which lives in an explicit [`SessionContext`] passed to
//! whoever needs it rather than a hidden global. Identity changes are
//! observable through a watch channel so navigation can react to sign-in
//! and sign-out.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

use shared::UserIdentity;

/// Authentication failure kinds the app distinguishes for user messaging
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("wrong credentials")]
    WrongCredentials,

    #[error("no account for this email")]
    UserNotFound,

    #[error("network unavailable")]
    NetworkUnavailable,

    #[error("authentication failed: {0}")]
    Other(String),
}

impl AuthError {
    /// Human-readable message shown on the auth screen.
    /// Unrecognized kinds fall back to a generic try-again message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => "Please enter a valid email address.",
            AuthError::WrongCredentials => "Incorrect email or password. Please try again.",
            AuthError::UserNotFound => "No account found with this email address.",
            AuthError::NetworkUnavailable => {
                "Network error: Please check your internet connection and try again."
            }
            AuthError::Other(_) => "Login failed. Please try again.",
        }
    }
}

/// The three operations the app consumes from the authentication provider
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Holds the current identity and notifies subscribers when it changes
pub struct SessionContext {
    client: Arc<dyn AuthClient>,
    identity_tx: watch::Sender<Option<UserIdentity>>,
}

impl SessionContext {
    /// Create a signed-out session context over an auth client
    pub fn new(client: Arc<dyn AuthClient>) -> Self {
        let (identity_tx, _) = watch::channel(None);
        Self { client, identity_tx }
    }

    /// Sign in and publish the new identity.
    /// On failure the current identity is left untouched.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        match self.client.sign_in(email, password).await {
            Ok(identity) => {
                info!("Signed in as {}", identity.email);
                self.identity_tx.send_replace(Some(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                warn!("Sign-in failed: {}", e);
                Err(e)
            }
        }
    }

    /// Create an account, then publish the new identity
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity, AuthError> {
        match self.client.sign_up(email, password).await {
            Ok(identity) => {
                info!("Registered and signed in as {}", identity.email);
                self.identity_tx.send_replace(Some(identity.clone()));
                Ok(identity)
            }
            Err(e) => {
                warn!("Sign-up failed: {}", e);
                Err(e)
            }
        }
    }

    /// Sign out and clear the published identity
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.client.sign_out().await?;
        self.identity_tx.send_replace(None);

        info!("Signed out");
        Ok(())
    }

    /// The currently signed-in identity, if any
    pub fn current_identity(&self) -> Option<UserIdentity> {
        self.identity_tx.borrow().clone()
    }

    /// Whether anyone is signed in; gates the main app surfaces
    pub fn is_authenticated(&self) -> bool {
        self.identity_tx.borrow().is_some()
    }

    /// Subscribe to identity changes (sign-in, sign-up, sign-out)
    pub fn subscribe(&self) -> watch::Receiver<Option<UserIdentity>> {
        self.identity_tx.subscribe()
    }
}
