//! Checkout Redirect

use crate::traits::{AuthProvider, TryOnApi};

pub const CHECKOUT_FAILED_MESSAGE: &str = "Could not start checkout. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No session; open the sign-in prompt
    SignInRequired,
    /// Navigate the browser here
    Redirect(String),
    Failed,
}

/// Request a checkout URL for `plan`
pub async fn start_checkout<A, C>(auth: &A, api: &C, plan: &str) -> CheckoutOutcome
where
    A: AuthProvider + ?Sized,
    C: TryOnApi + ?Sized,
{
    let Some(session) = super::current_session(auth).await else {
        return CheckoutOutcome::SignInRequired;
    };

    match api.checkout(&session.access_token, plan).await {
        Ok(checkout) => match checkout.url {
            Some(url) if !url.is_empty() => CheckoutOutcome::Redirect(url),
            _ => CheckoutOutcome::Failed,
        },
        Err(_) => CheckoutOutcome::Failed,
    }
}
