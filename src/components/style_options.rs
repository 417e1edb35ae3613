//! Style Options Panel
//!
//! Garment category, toggles and free-form prompt sent with each request.

use leptos::prelude::*;

use tryon_core::models::{GarmentCategory, StyleOptions};

#[component]
pub fn StyleOptionsPanel(options: RwSignal<StyleOptions>) -> impl IntoView {
    view! {
        <details class="style-options">
            <summary>"Style options"</summary>

            <label class="option-row">
                "Garment type"
                <select
                    id="garmentCategory"
                    on:change=move |ev| {
                        if let Ok(category) = event_target_value(&ev).parse::<GarmentCategory>() {
                            options.update(|o| o.garment_category = category);
                        }
                    }
                >
                    {GarmentCategory::ALL.into_iter().map(|category| view! {
                        <option
                            value=category.as_str()
                            selected=move || options.get().garment_category == category
                        >
                            {category.label()}
                        </option>
                    }).collect_view()}
                </select>
            </label>

            <label class="option-row">
                <input
                    type="checkbox"
                    prop:checked=move || options.get().preserve_shoes
                    on:change=move |ev| options.update(|o| o.preserve_shoes = event_target_checked(&ev))
                />
                "Keep my shoes"
            </label>
            <label class="option-row">
                <input
                    type="checkbox"
                    prop:checked=move || options.get().add_train
                    on:change=move |ev| options.update(|o| o.add_train = event_target_checked(&ev))
                />
                "Add a train"
            </label>
            <label class="option-row">
                <input
                    type="checkbox"
                    prop:checked=move || options.get().modesty_mode
                    on:change=move |ev| options.update(|o| o.modesty_mode = event_target_checked(&ev))
                />
                "Modesty mode"
            </label>

            <textarea
                id="customPrompt"
                placeholder="Extra instructions (optional)"
                prop:value=move || options.get().custom_prompt
                on:input=move |ev| options.update(|o| o.custom_prompt = event_target_value(&ev))
            ></textarea>
        </details>
    }
}
