//! Magic-Link Sign-In
//!
//! Button state across the one-time link request.

use crate::error::ValidationError;
use crate::traits::AuthProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MagicLinkState {
    #[default]
    Ready,
    Sending,
    /// Terminal until the sign-in prompt is reopened
    Sent,
}

impl MagicLinkState {
    pub fn label(&self) -> &'static str {
        match self {
            MagicLinkState::Ready => "Send Magic Link",
            MagicLinkState::Sending => "Sending...",
            MagicLinkState::Sent => "Check your email!",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, MagicLinkState::Ready)
    }

    /// State after an attempt finished
    pub fn settle(outcome: &MagicLinkOutcome) -> Self {
        match outcome {
            MagicLinkOutcome::Sent => MagicLinkState::Sent,
            MagicLinkOutcome::Rejected(_) | MagicLinkOutcome::Failed(_) => MagicLinkState::Ready,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MagicLinkOutcome {
    /// Empty email; the provider was not called
    Rejected(ValidationError),
    /// Provider error message, to be shown as-is
    Failed(String),
    Sent,
}

impl MagicLinkOutcome {
    /// Alert text for this outcome, if any
    pub fn alert(&self) -> Option<String> {
        match self {
            MagicLinkOutcome::Rejected(e) => Some(e.to_string()),
            MagicLinkOutcome::Failed(message) => Some(message.clone()),
            MagicLinkOutcome::Sent => None,
        }
    }
}

/// Request a sign-in link for `email` that redirects back to `redirect_to`.
/// `on_sending` runs once, right before the provider is called.
pub async fn send_magic_link<A, F>(auth: &A, email: &str, redirect_to: &str, on_sending: F) -> MagicLinkOutcome
where
    A: AuthProvider + ?Sized,
    F: FnOnce(),
{
    let email = email.trim();
    if email.is_empty() {
        return MagicLinkOutcome::Rejected(ValidationError::MissingEmail);
    }

    on_sending();
    match auth.send_magic_link(email, redirect_to).await {
        Ok(()) => MagicLinkOutcome::Sent,
        Err(e) => MagicLinkOutcome::Failed(e.to_string()),
    }
}
