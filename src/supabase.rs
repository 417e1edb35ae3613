//! Supabase Auth Bindings
//!
//! Frontend bindings to the hosted auth SDK (`window.supabase`, loaded by the
//! host page) behind the [`AuthProvider`] trait.

use std::cell::OnceCell;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use tryon_core::auth::{Envelope, OtpRequest, SessionData};
use tryon_core::models::Session;
use tryon_core::{AuthError, AuthProvider, ClientConfig};

use crate::browser::js_err;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    type SupabaseClient;

    #[derive(Clone)]
    type AuthClient;

    #[wasm_bindgen(catch, js_namespace = supabase, js_name = createClient)]
    fn create_client(url: &str, key: &str) -> Result<SupabaseClient, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn auth(this: &SupabaseClient) -> AuthClient;

    #[wasm_bindgen(method, catch, js_name = getSession)]
    async fn get_session(this: &AuthClient) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signInWithOtp)]
    async fn sign_in_with_otp(this: &AuthClient, credentials: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = signOut)]
    async fn sign_out(this: &AuthClient) -> Result<JsValue, JsValue>;
}

thread_local! {
    static AUTH_CLIENT: OnceCell<AuthClient> = const { OnceCell::new() };
}

/// Create the SDK client once per page
pub fn init(config: &ClientConfig) -> Result<(), String> {
    let client = create_client(&config.supabase_url, &config.supabase_anon_key).map_err(js_err)?;
    AUTH_CLIENT.with(|cell| {
        let _ = cell.set(client.auth());
    });
    Ok(())
}

fn auth_client() -> Result<AuthClient, AuthError> {
    AUTH_CLIENT
        .with(|cell| cell.get().cloned())
        .ok_or_else(|| AuthError::Binding("auth client not initialised".to_string()))
}

fn binding_err(e: JsValue) -> AuthError {
    AuthError::Binding(js_err(e))
}

fn field(value: &JsValue, name: &str) -> Option<JsValue> {
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Split an SDK result into data and `error.message`
fn envelope<T: DeserializeOwned>(value: &JsValue) -> Result<Envelope<T>, AuthError> {
    let error = field(value, "error").map(|e| {
        field(&e, "message")
            .and_then(|m| m.as_string())
            .unwrap_or_else(|| "Authentication error".to_string())
    });
    let data = match field(value, "data") {
        Some(data) if error.is_none() => {
            Some(serde_wasm_bindgen::from_value(data).map_err(|e| AuthError::Binding(e.to_string()))?)
        }
        _ => None,
    };
    Ok(Envelope { data, error })
}

/// Auth provider backed by the Supabase JS SDK
#[derive(Clone, Copy, Default)]
pub struct SupabaseAuth;

#[async_trait(?Send)]
impl AuthProvider for SupabaseAuth {
    async fn session(&self) -> Result<Option<Session>, AuthError> {
        let result = auth_client()?.get_session().await.map_err(binding_err)?;
        envelope::<SessionData>(&result)?.into_session()
    }

    async fn send_magic_link(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let credentials = serde_wasm_bindgen::to_value(&OtpRequest::new(email, redirect_to))
            .map_err(|e| AuthError::Binding(e.to_string()))?;
        let result = auth_client()?.sign_in_with_otp(credentials).await.map_err(binding_err)?;
        envelope::<serde_json::Value>(&result)?.into_result().map(|_| ())
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let result = auth_client()?.sign_out().await.map_err(binding_err)?;
        envelope::<serde_json::Value>(&result)?.into_result().map(|_| ())
    }
}
