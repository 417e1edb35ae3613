//! Service Traits
//!
//! Abstract interfaces for the two external collaborators: the auth provider
//! and the try-on backend. The browser implementations live in the UI crate
//! (auth) and in `client` (backend); tests use in-memory fakes.
//!
//! Futures are `?Send` because browser futures hold JS values.

use async_trait::async_trait;

use crate::error::{ApiResult, AuthError};
use crate::models::{CheckoutSession, ExtractedImage, GalleryItem, GenerationRequest, GenerationResult, Profile, Session};

/// Identity provider operations used by the client
#[async_trait(?Send)]
pub trait AuthProvider {
    /// Current session, if the user is signed in
    async fn session(&self) -> Result<Option<Session>, AuthError>;

    /// Email a one-time sign-in link that lands on `redirect_to`
    async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Try-on backend endpoints. `token` is the session's access token.
#[async_trait(?Send)]
pub trait TryOnApi {
    async fn profile(&self, token: &str) -> ApiResult<Profile>;

    async fn extract_image(&self, url: &str) -> ApiResult<ExtractedImage>;

    async fn generate(&self, token: &str, request: &GenerationRequest) -> ApiResult<GenerationResult>;

    async fn gallery(&self, token: &str) -> ApiResult<Vec<GalleryItem>>;

    async fn checkout(&self, token: &str, plan: &str) -> ApiResult<CheckoutSession>;
}
