//! # Gesture Resolution
//!
//! Translates a finished drag gesture into a swipe decision. The thresholds
//! mirror the card interaction: a committed horizontal drag or fast fling
//! resolves to accept/reject by direction, a mostly-vertical upward fling
//! resolves to super-accept, and anything else resolves to nothing (the
//! card springs back and no decision is recorded).

use shared::DecisionKind;

/// Fraction of the card width a drag must cross to commit a swipe
pub const SWIPE_THRESHOLD_RATIO: f32 = 0.25;

/// Horizontal fling velocity (px/s) that commits a swipe regardless of distance
pub const FLING_VELOCITY_THRESHOLD: f32 = 500.0;

/// Upward translation (px) that commits a super-accept
pub const SUPER_ACCEPT_TRANSLATION: f32 = -100.0;

/// Maximum horizontal drift (px) for an upward fling to still count as super-accept
pub const SUPER_ACCEPT_HORIZONTAL_SLOP: f32 = 50.0;

/// A finished drag gesture, as reported by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Horizontal translation in px; positive is rightward
    pub translation_x: f32,
    /// Vertical translation in px; negative is upward
    pub translation_y: f32,
    /// Horizontal velocity in px/s at release
    pub velocity_x: f32,
}

/// Resolve a finished gesture against the card width.
///
/// Returns `None` when the gesture did not commit to any direction.
/// Super-accept is checked first so a fast diagonal fling upward is not
/// misread as a horizontal swipe.
pub fn resolve_gesture(gesture: SwipeGesture, card_width: f32) -> Option<DecisionKind> {
    let is_super = gesture.translation_y < SUPER_ACCEPT_TRANSLATION
        && gesture.translation_x.abs() < SUPER_ACCEPT_HORIZONTAL_SLOP;
    if is_super {
        return Some(DecisionKind::SuperAccept);
    }

    let threshold = card_width * SWIPE_THRESHOLD_RATIO;
    if gesture.translation_x > threshold || gesture.velocity_x > FLING_VELOCITY_THRESHOLD {
        return Some(DecisionKind::Accept);
    }
    if gesture.translation_x < -threshold || gesture.velocity_x < -FLING_VELOCITY_THRESHOLD {
        return Some(DecisionKind::Reject);
    }

    None
}
