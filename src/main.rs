#![allow(warnings)]
//! Try-On Studio Frontend Entry Point

mod app;
mod browser;
mod components;
mod config;
mod context;
mod store;
mod supabase;

use app::App;
use leptos::prelude::*;
use tryon_core::Endpoints;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load();
    if let Err(e) = supabase::init(&config) {
        web_sys::console::error_1(&format!("[AUTH] Could not create auth client: {}", e).into());
    }

    let endpoints = match Endpoints::new(&config.api_base) {
        Ok(endpoints) => endpoints,
        Err(e) => {
            web_sys::console::error_1(&format!("[CONFIG] {}", e).into());
            return;
        }
    };

    mount_to_body(move || view! { <App endpoints=endpoints.clone() /> });
}
