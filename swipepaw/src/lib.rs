//! Swipepaw core library.
//!
//! All non-UI logic for the Swipepaw pet adoption app: the swipe session,
//! match evaluation, conversations, preferences, and their persistence.
//! A presentation layer drives this crate through [`backend::AppState`].

pub mod backend;

pub use backend::{initialize_backend, AppState};
