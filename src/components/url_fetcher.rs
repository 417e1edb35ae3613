//! Garment URL Fetcher
//!
//! Lets the user paste a product or image URL instead of uploading a file.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{fetch_remote_image, FetchState, RemoteImageOutcome};

use crate::browser;
use crate::context::AppContext;

#[component]
pub fn UrlFetcher(
    /// Garment preview to point at the extracted image
    garment_preview: RwSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (url, set_url) = signal(String::new());
    let (state, set_state) = signal(FetchState::Ready);

    let fetch = move |_| {
        if !state.get_untracked().is_enabled() {
            return;
        }
        let url = url.get_untracked();

        spawn_local(async move {
            let outcome = fetch_remote_image(&ctx.api(), &url, || set_state.set(FetchState::Fetching)).await;
            match &outcome {
                RemoteImageOutcome::Fetched(image_url) => {
                    web_sys::console::log_1(&format!("[FETCH] Garment image {}", image_url).into());
                    garment_preview.set(Some(image_url.clone()));
                }
                RemoteImageOutcome::Failed(message) => {
                    web_sys::console::error_1(&format!("[FETCH] {}", message).into());
                }
                RemoteImageOutcome::Rejected(_) => {}
            }
            set_state.set(FetchState::Ready);
            if let Some(message) = outcome.alert() {
                browser::alert(&message);
            }
        });
    };

    view! {
        <div class="url-fetch-row">
            <input
                type="url"
                id="garmentUrl"
                placeholder="...or paste a product image URL"
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <button
                type="button"
                id="fetchUrlBtn"
                disabled=move || !state.get().is_enabled()
                on:click=fetch
            >
                {move || state.get().label()}
            </button>
        </div>
    }
}
