//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use tryon_core::flows::AuthView;

/// Top-level pages reachable from the header tabs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Studio,
    Gallery,
    Pricing,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Studio, Page::Gallery, Page::Pricing];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Studio => "Studio",
            Page::Gallery => "My Gallery",
            Page::Pricing => "Buy Credits",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in/out header state and credit balance
    pub auth: AuthView,
    /// Whether the sign-in prompt is open
    pub sign_in_open: bool,
    /// Bumped every time the prompt opens, so its form can reset
    pub sign_in_generation: u32,
    pub page: Page,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Open the sign-in prompt (login button or a gated action without session)
pub fn store_open_sign_in(store: &AppStore) {
    store.sign_in_open().set(true);
    store.sign_in_generation().update(|g| *g += 1);
}

pub fn store_close_sign_in(store: &AppStore) {
    store.sign_in_open().set(false);
}

/// Show the balance reported by the backend
pub fn store_set_credits(store: &AppStore, credits: u32) {
    store.auth().update(|view| *view = std::mem::take(view).with_credits(credits));
}
