//! Auth Session View
//!
//! Which of the signed-out / signed-in header controls is shown, and the
//! credit balance displayed next to the user info.

use crate::error::ApiError;
use crate::traits::{AuthProvider, TryOnApi};

/// Header auth state. A single enum, so the login control and the user info
/// can never be visible at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthView {
    #[default]
    SignedOut,
    SignedIn {
        email: Option<String>,
        /// `None` until the profile has loaded once
        credits: Option<u32>,
    },
}

impl AuthView {
    pub fn shows_login(&self) -> bool {
        matches!(self, AuthView::SignedOut)
    }

    pub fn shows_user_info(&self) -> bool {
        matches!(self, AuthView::SignedIn { .. })
    }

    pub fn credits(&self) -> Option<u32> {
        match self {
            AuthView::SignedIn { credits, .. } => *credits,
            AuthView::SignedOut => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            AuthView::SignedIn { email, .. } => email.as_deref(),
            AuthView::SignedOut => None,
        }
    }

    /// Replace the displayed balance; no-op when signed out
    pub fn with_credits(self, value: u32) -> Self {
        match self {
            AuthView::SignedIn { email, .. } => AuthView::SignedIn { email, credits: Some(value) },
            AuthView::SignedOut => AuthView::SignedOut,
        }
    }

    /// Text for the credit badge
    pub fn credits_label(&self) -> String {
        format!("{} Credits", self.credits().unwrap_or(0))
    }
}

/// Result of [`refresh_auth`]
#[derive(Debug, Clone, PartialEq)]
pub struct AuthRefresh {
    pub view: AuthView,
    /// Set when the profile request failed; the previous balance was kept
    pub profile_error: Option<ApiError>,
}

/// Query the session and, when signed in, the credit balance.
///
/// `on_signed_in` receives the signed-in view before the profile request, so
/// the user info replaces the login control without waiting on the backend.
/// A failed profile request keeps whatever balance `previous` displayed.
pub async fn refresh_auth<A, C, F>(auth: &A, api: &C, previous: &AuthView, on_signed_in: F) -> AuthRefresh
where
    A: AuthProvider + ?Sized,
    C: TryOnApi + ?Sized,
    F: FnOnce(AuthView),
{
    let Some(session) = super::current_session(auth).await else {
        return AuthRefresh { view: AuthView::SignedOut, profile_error: None };
    };

    let email = session.email().map(str::to_string);
    on_signed_in(AuthView::SignedIn { email: email.clone(), credits: previous.credits() });
    match api.profile(&session.access_token).await {
        Ok(profile) => AuthRefresh {
            view: AuthView::SignedIn { email, credits: Some(profile.credits) },
            profile_error: None,
        },
        Err(e) => AuthRefresh {
            view: AuthView::SignedIn { email, credits: previous.credits() },
            profile_error: Some(e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::flows::fakes::{FakeApi, FakeAuth};
    use crate::models::Profile;

    #[test]
    fn login_and_user_info_are_exclusive() {
        let views = [
            AuthView::SignedOut,
            AuthView::SignedIn { email: None, credits: None },
            AuthView::SignedIn { email: Some("a@b.c".into()), credits: Some(3) },
        ];
        for view in views {
            assert_ne!(view.shows_login(), view.shows_user_info(), "{:?}", view);
        }
    }

    #[test]
    fn credits_label_formats_balance() {
        let view = AuthView::SignedIn { email: None, credits: None };
        assert_eq!(view.credits_label(), "0 Credits");
        assert_eq!(view.with_credits(12).credits_label(), "12 Credits");
        assert_eq!(AuthView::SignedOut.with_credits(5), AuthView::SignedOut);
    }

    #[tokio::test]
    async fn signed_in_loads_credits_with_bearer_token() {
        let auth = FakeAuth::signed_in("tok-1");
        let api = FakeApi { profile: Ok(Profile { credits: 7 }), ..Default::default() };

        let refresh = refresh_auth(&auth, &api, &AuthView::SignedOut, |_| {}).await;

        assert_eq!(
            refresh.view,
            AuthView::SignedIn { email: Some("shopper@example.com".into()), credits: Some(7) }
        );
        assert_eq!(refresh.profile_error, None);
        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].token.as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn user_info_is_shown_before_profile_request() {
        let auth = FakeAuth::signed_in("tok-1");
        let api = FakeApi { profile: Ok(Profile { credits: 9 }), ..Default::default() };
        let previous = AuthView::SignedIn { email: None, credits: Some(2) };
        let mut early = None;

        let refresh = refresh_auth(&auth, &api, &previous, |view| {
            early = Some((view, api.call_count()));
        })
        .await;

        let (view, calls_before) = early.expect("signed-in view published");
        assert_eq!(calls_before, 0);
        assert!(view.shows_user_info());
        assert_eq!(view.email(), Some("shopper@example.com"));
        assert_eq!(view.credits(), Some(2));
        assert_eq!(refresh.view.credits(), Some(9));
    }

    #[tokio::test]
    async fn signed_out_never_publishes_user_info() {
        let auth = FakeAuth::signed_out();
        let api = FakeApi::default();
        let mut published = false;

        refresh_auth(&auth, &api, &AuthView::SignedOut, |_| published = true).await;
        assert!(!published);
    }

    #[tokio::test]
    async fn profile_failure_keeps_previous_balance() {
        let auth = FakeAuth::signed_in("tok-1");
        let api = FakeApi::default();
        let previous = AuthView::SignedIn { email: None, credits: Some(4) };

        let refresh = refresh_auth(&auth, &api, &previous, |_| {}).await;

        assert_eq!(refresh.view.credits(), Some(4));
        assert!(refresh.view.shows_user_info());
        assert!(refresh.profile_error.is_some());
    }

    #[tokio::test]
    async fn signed_out_skips_profile() {
        let auth = FakeAuth::signed_out();
        let api = FakeApi { profile: Ok(Profile { credits: 7 }), ..Default::default() };

        let refresh = refresh_auth(&auth, &api, &AuthView::SignedOut, |_| {}).await;

        assert_eq!(refresh.view, AuthView::SignedOut);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn provider_error_counts_as_signed_out() {
        let auth = FakeAuth {
            session_error: Some(AuthError::Binding("sdk not loaded".into())),
            ..Default::default()
        };
        let api = FakeApi::default();

        let refresh = refresh_auth(&auth, &api, &AuthView::SignedOut, |_| {}).await;
        assert!(refresh.view.shows_login());
    }
}
