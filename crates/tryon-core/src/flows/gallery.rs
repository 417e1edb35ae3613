//! Gallery Loading

use crate::error::ApiResult;
use crate::models::GalleryItem;
use crate::traits::{AuthProvider, TryOnApi};

pub const GALLERY_EMPTY_MESSAGE: &str = "No generations yet. Create your first look in the Studio!";
pub const GALLERY_FAILED_MESSAGE: &str = "Failed to load gallery.";

/// What the gallery grid shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Empty,
    Loaded(Vec<GalleryItem>),
    Error(String),
}

impl GalleryState {
    pub fn settle(result: ApiResult<Vec<GalleryItem>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => GalleryState::Empty,
            Ok(items) => GalleryState::Loaded(items),
            Err(_) => GalleryState::Error(GALLERY_FAILED_MESSAGE.to_string()),
        }
    }

    /// Tiles to render; empty for every non-loaded state
    pub fn items(&self) -> &[GalleryItem] {
        match self {
            GalleryState::Loaded(items) => items.as_slice(),
            _ => &[],
        }
    }

    /// Tiles with their grid position. The position is part of the render
    /// key, so a URL returned twice still gets two tiles.
    pub fn tiles(&self) -> Vec<(usize, GalleryItem)> {
        self.items().iter().cloned().enumerate().collect()
    }

    /// Message shown in place of tiles
    pub fn message(&self) -> Option<&str> {
        match self {
            GalleryState::Idle | GalleryState::Loaded(_) => None,
            GalleryState::Loading => Some("Loading your gallery..."),
            GalleryState::Empty => Some(GALLERY_EMPTY_MESSAGE),
            GalleryState::Error(message) => Some(message.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryOutcome {
    SignInRequired,
    Settled(GalleryState),
}

/// Fetch the full gallery. `on_loading` runs once before the request.
pub async fn load_gallery<A, C, F>(auth: &A, api: &C, on_loading: F) -> GalleryOutcome
where
    A: AuthProvider + ?Sized,
    C: TryOnApi + ?Sized,
    F: FnOnce(),
{
    let Some(session) = super::current_session(auth).await else {
        return GalleryOutcome::SignInRequired;
    };

    on_loading();
    GalleryOutcome::Settled(GalleryState::settle(api.gallery(&session.access_token).await))
}
