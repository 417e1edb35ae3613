//! Studio Page
//!
//! Photo and garment inputs, style options, and the generate trigger with its
//! loading, error and result panels.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{run_generation, GenerationInputs, GenerationOutcome, GenerationState, RESULT_SCROLL_DELAY_MS};
use tryon_core::models::StyleOptions;

use crate::browser::{self, BrowserFile};
use crate::components::{ImageInput, StyleOptionsPanel, UrlFetcher};
use crate::context::AppContext;
use crate::store::store_set_credits;

const RESULT_ID: &str = "result";

fn selected(input_ref: NodeRef<Input>) -> Option<BrowserFile> {
    input_ref.get_untracked().and_then(|input| browser::first_file(&input)).map(BrowserFile)
}

#[component]
pub fn Studio() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store();

    let base_ref = NodeRef::<Input>::new();
    let garment_ref = NodeRef::<Input>::new();
    let base_preview = RwSignal::new(None::<String>);
    let garment_preview = RwSignal::new(None::<String>);
    let options = RwSignal::new(StyleOptions::default());
    let (state, set_state) = signal(GenerationState::Idle);

    let generate = move |_| {
        if !state.get_untracked().can_start() {
            return;
        }
        let inputs = GenerationInputs {
            base_image: selected(base_ref),
            garment_file: selected(garment_ref),
            garment_preview_src: garment_preview.get_untracked(),
            options: options.get_untracked(),
        };

        spawn_local(async move {
            let outcome = run_generation(&ctx.auth(), &ctx.api(), inputs, || {
                web_sys::console::log_1(&"[GENERATE] Submitting".into());
                set_state.set(GenerationState::Submitting);
            })
            .await;

            match &outcome {
                GenerationOutcome::SignInRequired => ctx.open_sign_in(),
                GenerationOutcome::Completed(Ok(result)) => {
                    web_sys::console::log_1(&format!("[GENERATE] Result {}", result.result_url).into());
                }
                GenerationOutcome::Completed(Err(e)) => {
                    web_sys::console::error_1(&format!("[GENERATE] Failed: {}", e).into());
                }
                GenerationOutcome::Unreadable(e) => {
                    web_sys::console::error_1(&format!("[GENERATE] Unreadable file: {}", e).into());
                }
                GenerationOutcome::Rejected(_) => {}
            }
            if let Some(message) = outcome.alert() {
                browser::alert(&message);
            }
            if let Some(credits) = outcome.remaining_credits() {
                store_set_credits(&store, credits);
            }

            let succeeded = matches!(outcome, GenerationOutcome::Completed(Ok(_)));
            set_state.update(|s| *s = std::mem::take(s).after(&outcome));

            if succeeded {
                TimeoutFuture::new(RESULT_SCROLL_DELAY_MS).await;
                browser::scroll_into_view(RESULT_ID);
            }
        });
    };

    view! {
        <section class="studio">
            <div class="upload-grid">
                <ImageInput
                    id="baseImage"
                    label="Your photo"
                    placeholder="Upload a full-body photo"
                    input_ref=base_ref
                    preview=base_preview
                />
                <div class="garment-column">
                    <ImageInput
                        id="garmentImage"
                        label="Garment"
                        placeholder="Upload a garment image"
                        input_ref=garment_ref
                        preview=garment_preview
                    />
                    <UrlFetcher garment_preview=garment_preview />
                </div>
            </div>

            <StyleOptionsPanel options=options />

            <button
                id="generateBtn"
                class="primary-btn"
                disabled=move || !state.get().trigger_enabled()
                on:click=generate
            >
                "Generate Try-On"
            </button>

            <Show when=move || state.get().is_loading()>
                <div id="loading" class="loading">
                    <div class="spinner"></div>
                    <p>"Styling your look... this can take up to a minute."</p>
                </div>
            </Show>

            {move || state.get().error().map(|message| view! {
                <div id="error" class="error-panel">{message.to_string()}</div>
            })}

            <div id=RESULT_ID class="result-panel" class:hidden=move || state.get().result().is_none()>
                {move || state.get().result().cloned().map(|result| view! {
                    <img id="resultImage" src=result.result_url.clone() alt="Try-on result" />
                    <a
                        id="downloadBtn"
                        class="secondary-btn"
                        href=result.result_url
                        download="tryon-result.png"
                        target="_blank"
                        rel="noopener"
                    >
                        "Download"
                    </a>
                })}
            </div>
        </section>
    }
}
