//! Sign-In Modal
//!
//! Magic-link sign-in. Opened by the login button and by gated actions
//! attempted without a session; a click on the backdrop closes it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use tryon_core::flows::{send_magic_link, MagicLinkState};

use crate::browser;
use crate::context::AppContext;
use crate::store::{store_close_sign_in, AppStateStoreFields};

#[component]
pub fn AuthModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let (email, set_email) = signal(String::new());
    let (state, set_state) = signal(MagicLinkState::Ready);

    // Every reopen starts from a ready trigger
    Effect::new(move |_| {
        let _ = store.sign_in_generation().get();
        set_state.set(MagicLinkState::Ready);
    });

    let send = move |_| {
        if !state.get_untracked().is_enabled() {
            return;
        }
        let email = email.get_untracked();

        spawn_local(async move {
            let redirect_to = browser::origin().unwrap_or_default();
            let outcome = send_magic_link(&ctx.auth(), &email, &redirect_to, || {
                set_state.set(MagicLinkState::Sending)
            })
            .await;

            set_state.set(MagicLinkState::settle(&outcome));
            if let Some(message) = outcome.alert() {
                browser::alert(&message);
            }
        });
    };

    let on_backdrop = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            store_close_sign_in(&store);
        }
    };

    view! {
        <Show when=move || store.sign_in_open().get()>
            <div id="authModal" class="modal-backdrop" on:click=on_backdrop>
                <div class="modal">
                    <h2>"Sign in"</h2>
                    <p>"We'll email you a one-time link. No password needed."</p>
                    <input
                        id="authEmail"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <button
                        id="sendMagicLink"
                        class="primary-btn"
                        disabled=move || !state.get().is_enabled()
                        on:click=send
                    >
                        {move || state.get().label()}
                    </button>
                </div>
            </div>
        </Show>
    }
}
