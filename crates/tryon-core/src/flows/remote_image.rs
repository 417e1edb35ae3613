//! Remote Garment Image
//!
//! Resolve a product page or image URL into a usable garment image URL.

use crate::error::ValidationError;
use crate::traits::TryOnApi;

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch image from URL";

/// Fetch trigger state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Ready,
    Fetching,
}

impl FetchState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, FetchState::Ready)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Ready => "Fetch",
            FetchState::Fetching => "Fetching...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteImageOutcome {
    Rejected(ValidationError),
    /// Image URL to use as the garment preview
    Fetched(String),
    Failed(String),
}

impl RemoteImageOutcome {
    pub fn alert(&self) -> Option<String> {
        match self {
            RemoteImageOutcome::Rejected(e) => Some(e.to_string()),
            RemoteImageOutcome::Failed(message) => Some(message.clone()),
            RemoteImageOutcome::Fetched(_) => None,
        }
    }
}

/// Ask the backend to extract an image from `url`. `on_fetching` runs once
/// before the request; the trigger returns to [`FetchState::Ready`] for
/// every outcome.
pub async fn fetch_remote_image<C, F>(api: &C, url: &str, on_fetching: F) -> RemoteImageOutcome
where
    C: TryOnApi + ?Sized,
    F: FnOnce(),
{
    let url = url.trim();
    if url.is_empty() {
        return RemoteImageOutcome::Rejected(ValidationError::MissingUrl);
    }

    on_fetching();
    match api.extract_image(url).await {
        Ok(extracted) => RemoteImageOutcome::Fetched(extracted.image_url),
        Err(e) => RemoteImageOutcome::Failed(e.detail_or(FETCH_FAILED_MESSAGE)),
    }
}
