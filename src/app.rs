//! Try-On Studio App
//!
//! Root component: header, the current page, and the sign-in modal.

use leptos::prelude::*;
use reactive_stores::Store;

use tryon_core::Endpoints;

use crate::components::{AuthModal, GalleryPage, Header, PricingPage, Studio};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App(endpoints: Endpoints) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(endpoints, store);
    provide_context(ctx);

    // Session and credits are read once per page load
    ctx.refresh_auth();

    let page = move || store.page().get();

    view! {
        <div class="app-layout">
            <Header />

            <main class="main-content">
                // Studio stays mounted so the form survives tab switches
                <div class:hidden=move || page() != Page::Studio>
                    <Studio />
                </div>
                {move || match page() {
                    Page::Studio => ().into_any(),
                    Page::Gallery => view! { <GalleryPage /> }.into_any(),
                    Page::Pricing => view! { <PricingPage /> }.into_any(),
                }}
            </main>

            <AuthModal />
        </div>
    }
}
