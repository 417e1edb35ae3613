//! In-memory service fakes for flow tests

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult, AuthError};
use crate::models::{
    CheckoutSession, ExtractedImage, GalleryItem, GenerationRequest, GenerationResult, Profile, Session, SessionUser,
};
use crate::traits::{AuthProvider, TryOnApi};

pub fn session(token: &str) -> Session {
    Session {
        access_token: token.to_string(),
        expires_at: None,
        user: Some(SessionUser { email: Some("shopper@example.com".to_string()) }),
    }
}

#[derive(Default)]
pub struct FakeAuth {
    pub session: Option<Session>,
    pub session_error: Option<AuthError>,
    pub otp_error: Option<AuthError>,
    /// (email, redirect_to) per magic-link request
    pub otp_calls: RefCell<Vec<(String, String)>>,
}

impl FakeAuth {
    pub fn signed_in(token: &str) -> Self {
        Self { session: Some(session(token)), ..Default::default() }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    async fn session(&self) -> Result<Option<Session>, AuthError> {
        match &self.session_error {
            Some(e) => Err(e.clone()),
            None => Ok(self.session.clone()),
        }
    }

    async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        self.otp_calls.borrow_mut().push((email.to_string(), redirect_to.to_string()));
        match &self.otp_error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

/// Recorded backend call: endpoint name and bearer token (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub endpoint: &'static str,
    pub token: Option<String>,
}

pub struct FakeApi {
    pub profile: ApiResult<Profile>,
    pub extract: ApiResult<ExtractedImage>,
    pub generate: ApiResult<GenerationResult>,
    pub gallery: ApiResult<Vec<GalleryItem>>,
    pub checkout: ApiResult<CheckoutSession>,
    pub calls: RefCell<Vec<Call>>,
    pub last_generation: RefCell<Option<GenerationRequest>>,
    pub last_extract_url: RefCell<Option<String>>,
    pub last_plan: RefCell<Option<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        let unset = || ApiError::Network("not configured".to_string());
        Self {
            profile: Err(unset()),
            extract: Err(unset()),
            generate: Err(unset()),
            gallery: Err(unset()),
            checkout: Err(unset()),
            calls: RefCell::new(Vec::new()),
            last_generation: RefCell::new(None),
            last_extract_url: RefCell::new(None),
            last_plan: RefCell::new(None),
        }
    }
}

impl FakeApi {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, endpoint: &'static str, token: Option<&str>) {
        self.calls.borrow_mut().push(Call { endpoint, token: token.map(str::to_string) });
    }
}

#[async_trait(?Send)]
impl TryOnApi for FakeApi {
    async fn profile(&self, token: &str) -> ApiResult<Profile> {
        self.record("profile", Some(token));
        self.profile.clone()
    }

    async fn extract_image(&self, url: &str) -> ApiResult<ExtractedImage> {
        self.record("extract-image", None);
        *self.last_extract_url.borrow_mut() = Some(url.to_string());
        self.extract.clone()
    }

    async fn generate(&self, token: &str, request: &GenerationRequest) -> ApiResult<GenerationResult> {
        self.record("generate", Some(token));
        *self.last_generation.borrow_mut() = Some(request.clone());
        self.generate.clone()
    }

    async fn gallery(&self, token: &str) -> ApiResult<Vec<GalleryItem>> {
        self.record("gallery", Some(token));
        self.gallery.clone()
    }

    async fn checkout(&self, token: &str, plan: &str) -> ApiResult<CheckoutSession> {
        self.record("checkout", Some(token));
        *self.last_plan.borrow_mut() = Some(plan.to_string());
        self.checkout.clone()
    }
}
