//! Try-On Studio Client Core
//!
//! Platform-neutral half of the studio frontend:
//! - models: backend and auth payloads
//! - error: API, auth and validation errors
//! - traits: auth provider and backend interfaces
//! - client: reqwest backend client
//! - flows: view states and async flows driven by the UI
//! - config: layered client settings

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod flows;
pub mod models;
pub mod traits;

pub use client::{Endpoints, HttpTryOnApi};
pub use config::{ClientConfig, ConfigLayer};
pub use error::{ApiError, ApiResult, AuthError, ValidationError};
pub use traits::{AuthProvider, TryOnApi};
