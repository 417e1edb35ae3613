//! Pricing Page
//!
//! Credit packs; buying one redirects to the payment processor.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tryon_core::flows::{start_checkout, CheckoutOutcome, CHECKOUT_FAILED_MESSAGE};
use tryon_core::models::PLANS;

use crate::browser;
use crate::context::AppContext;

#[component]
pub fn PricingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let buy = move |plan: &'static str| {
        spawn_local(async move {
            match start_checkout(&ctx.auth(), &ctx.api(), plan).await {
                CheckoutOutcome::SignInRequired => ctx.open_sign_in(),
                CheckoutOutcome::Redirect(url) => {
                    web_sys::console::log_1(&format!("[CHECKOUT] Redirecting for plan {}", plan).into());
                    if let Err(e) = browser::navigate(&url) {
                        web_sys::console::error_1(&format!("[CHECKOUT] Navigation failed: {}", e).into());
                        browser::alert(CHECKOUT_FAILED_MESSAGE);
                    }
                }
                CheckoutOutcome::Failed => {
                    web_sys::console::error_1(&format!("[CHECKOUT] No checkout URL for plan {}", plan).into());
                    browser::alert(CHECKOUT_FAILED_MESSAGE);
                }
            }
        });
    };

    view! {
        <section class="pricing">
            <h2>"Buy Credits"</h2>
            <p class="pricing-note">"Each try-on uses one credit."</p>
            <div class="plan-grid">
                {PLANS.iter().map(|plan| {
                    let id = plan.id;
                    view! {
                        <div class="plan-card">
                            <h3>{plan.name}</h3>
                            <p class="plan-credits">{format!("{} credits", plan.credits)}</p>
                            <p class="plan-price">{plan.price_label}</p>
                            <button class="primary-btn" on:click=move |_| buy(id)>"Buy"</button>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
