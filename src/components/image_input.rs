//! Image Input Component
//!
//! File input bound to a live thumbnail. The preview signal is shared with
//! the URL fetcher, which can point the garment preview at a remote image.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{bind_preview, PreviewOutcome};

use crate::browser::{self, BrowserFile};

/// Upload box with preview and placeholder
#[component]
pub fn ImageInput(
    /// DOM id of the file input
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    /// Read by the studio when building a request
    input_ref: NodeRef<Input>,
    /// Preview `src`; `None` shows the placeholder
    preview: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_change = move |_| {
        let Some(input) = input_ref.get_untracked() else { return };
        let file = browser::first_file(&input).map(BrowserFile);

        spawn_local(async move {
            match bind_preview(file.as_ref()).await {
                PreviewOutcome::Unreadable(e) => {
                    web_sys::console::warn_1(&format!("[PREVIEW] Could not read {}: {}", id, e).into())
                }
                PreviewOutcome::NoSelection => {}
                outcome => preview.update(|src| outcome.apply(src)),
            }
        });
    };

    view! {
        <div class="upload-box">
            <label for=id class="upload-label">{label}</label>
            <input
                id=id
                type="file"
                accept="image/*"
                node_ref=input_ref
                on:change=on_change
            />
            <div class="preview-frame">
                <img
                    class="preview-image"
                    class:hidden=move || preview.get().is_none()
                    src=move || preview.get().unwrap_or_default()
                    alt=label
                />
                <div class="preview-placeholder" class:hidden=move || preview.get().is_some()>
                    {placeholder}
                </div>
            </div>
        </div>
    }
}
