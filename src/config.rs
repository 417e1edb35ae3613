//! Frontend Configuration
//!
//! Compile-time environment plus `window.__TRYON_CONFIG__` set by the host page.

use wasm_bindgen::JsValue;

use tryon_core::{ClientConfig, ConfigLayer};

use crate::browser::{self, js_err};

const RUNTIME_CONFIG_KEY: &str = "__TRYON_CONFIG__";

fn runtime_layer() -> Result<ConfigLayer, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY)).map_err(js_err)?;
    if value.is_undefined() || value.is_null() {
        return Ok(ConfigLayer::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Resolve the client configuration for this page
pub fn load() -> ClientConfig {
    let compiled = ConfigLayer::from_env(
        option_env!("TRYON_SUPABASE_URL"),
        option_env!("TRYON_SUPABASE_ANON_KEY"),
        option_env!("TRYON_API_BASE"),
    );
    let runtime = runtime_layer().unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("[CONFIG] Ignoring {}: {}", RUNTIME_CONFIG_KEY, e).into());
        ConfigLayer::default()
    });
    let origin = browser::origin().unwrap_or_default();

    let config = ClientConfig::resolve(&[&compiled, &runtime], &origin);
    let missing = config.missing();
    if !missing.is_empty() {
        web_sys::console::warn_1(&format!("[CONFIG] Missing settings: {}", missing.join(", ")).into());
    }
    web_sys::console::log_1(&format!("[CONFIG] API base {}", config.api_base).into());
    config
}
