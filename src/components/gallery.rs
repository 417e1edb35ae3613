//! Gallery Page
//!
//! Grid of the signed-in user's previous results. Re-fetched every time the
//! page is opened.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{load_gallery, GalleryOutcome, GalleryState};

use crate::context::AppContext;

#[component]
pub fn GalleryPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(GalleryState::Idle);

    let load = move || {
        spawn_local(async move {
            let outcome = load_gallery(&ctx.auth(), &ctx.api(), || set_state.set(GalleryState::Loading)).await;
            match outcome {
                GalleryOutcome::SignInRequired => ctx.open_sign_in(),
                GalleryOutcome::Settled(next) => {
                    if let GalleryState::Error(message) = &next {
                        web_sys::console::error_1(&format!("[GALLERY] {}", message).into());
                    } else {
                        web_sys::console::log_1(&format!("[GALLERY] Loaded {} items", next.items().len()).into());
                    }
                    set_state.set(next);
                }
            }
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    view! {
        <section class="gallery">
            <div class="gallery-header">
                <h2>"My Gallery"</h2>
                <button
                    class="secondary-btn"
                    disabled=move || state.get() == GalleryState::Loading
                    on:click=move |_| load()
                >
                    "Refresh"
                </button>
            </div>

            <div id="galleryGrid" class="gallery-grid">
                {move || state.get().message().map(|message| view! {
                    <p class="gallery-message">{message.to_string()}</p>
                })}
                <For
                    each=move || state.get().tiles()
                    key=|(index, item)| (*index, item.result_url.clone())
                    children=move |(_, item)| {
                        view! {
                            <div class="gallery-tile">
                                <img src=item.result_url.clone() alt="Previous try-on" loading="lazy" />
                                <a
                                    class="tile-download"
                                    href=item.result_url
                                    download="tryon-result.png"
                                    target="_blank"
                                    rel="noopener"
                                >
                                    "Download"
                                </a>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
