//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{refresh_auth, AuthView};
use tryon_core::{Endpoints, HttpTryOnApi};

use crate::store::{store_open_sign_in, AppStateStoreFields, AppStore};
use crate::supabase::SupabaseAuth;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    endpoints: StoredValue<Endpoints>,
    store: AppStore,
}

impl AppContext {
    pub fn new(endpoints: Endpoints, store: AppStore) -> Self {
        Self {
            endpoints: StoredValue::new(endpoints),
            store,
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Backend client for one flow run
    pub fn api(&self) -> HttpTryOnApi {
        HttpTryOnApi::new(self.endpoints.get_value())
    }

    pub fn auth(&self) -> SupabaseAuth {
        SupabaseAuth
    }

    pub fn open_sign_in(&self) {
        store_open_sign_in(&self.store);
    }

    /// Re-read the session and credit balance into the header
    pub fn refresh_auth(&self) {
        let store = self.store;
        let ctx = *self;
        spawn_local(async move {
            let previous = store.auth().get_untracked();
            let refresh = refresh_auth(&ctx.auth(), &ctx.api(), &previous, |view| {
                store.auth().set(view);
            })
            .await;
            if let Some(e) = &refresh.profile_error {
                web_sys::console::error_1(&format!("[AUTH] Profile fetch failed: {}", e).into());
            }
            web_sys::console::log_1(
                &format!("[AUTH] signed_in={}", refresh.view.shows_user_info()).into(),
            );
            store.auth().set(refresh.view);
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Header auth view, for components that only read it
pub fn use_auth_view() -> Signal<AuthView> {
    let store = use_app_context().store();
    Signal::derive(move || store.auth().get())
}
