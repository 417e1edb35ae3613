//! UI Flows
//!
//! Each flow is a view-state enum with pure transitions plus an async
//! function that drives the collaborators. Components render the state and
//! apply the returned outcome; they never talk to the services directly.

mod auth_view;
mod checkout;
mod gallery;
mod generation;
mod magic_link;
mod preview;
mod remote_image;

#[cfg(test)]
pub(crate) mod fakes;

pub use auth_view::*;
pub use checkout::*;
pub use gallery::*;
pub use generation::*;
pub use magic_link::*;
pub use preview::*;
pub use remote_image::*;

use crate::models::Session;
use crate::traits::AuthProvider;

/// Current session for gated actions. Provider failures count as signed out,
/// which routes the user to the sign-in prompt.
pub async fn current_session<A: AuthProvider + ?Sized>(auth: &A) -> Option<Session> {
    auth.session().await.ok().flatten()
}
