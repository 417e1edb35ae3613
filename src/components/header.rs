//! Header Component
//!
//! Brand, page tabs and the signed-in/out controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::AuthProvider;

use crate::browser;
use crate::context::{use_auth_view, AppContext};
use crate::store::{AppStateStoreFields, Page};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();
    let auth_view = use_auth_view();

    let logout = move |_| {
        spawn_local(async move {
            if let Err(e) = ctx.auth().sign_out().await {
                web_sys::console::error_1(&format!("[AUTH] Sign-out failed: {}", e).into());
            }
            browser::reload();
        });
    };

    view! {
        <header class="app-header">
            <div class="brand">"Try-On Studio"</div>

            <nav class="page-tabs">
                {Page::ALL.into_iter().map(|page| view! {
                    <button
                        class=move || if store.page().get() == page { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| store.page().set(page)
                    >
                        {page.title()}
                    </button>
                }).collect_view()}
            </nav>

            <div class="auth-controls">
                <button
                    id="loginBtn"
                    class="primary-btn"
                    class:auth-hidden=move || !auth_view.get().shows_login()
                    on:click=move |_| ctx.open_sign_in()
                >
                    "Sign In"
                </button>
                <div id="userInfo" class="user-info" class:auth-hidden=move || !auth_view.get().shows_user_info()>
                    <span class="user-email">{move || auth_view.get().email().unwrap_or_default().to_string()}</span>
                    <span id="creditCount" class="credit-badge">{move || auth_view.get().credits_label()}</span>
                    <button id="logoutBtn" class="secondary-btn" on:click=logout>"Log out"</button>
                </div>
            </div>
        </header>
    }
}
