//! Auth Provider Payloads
//!
//! Argument and response shapes of the hosted auth SDK. Every SDK call
//! resolves to `{ data, error }`; SDK errors are class instances, so the
//! binding reads `error.message` itself and hands over an [`Envelope`].

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::Session;

/// Decoded `{ data, error }` result of an SDK call
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub data: Option<T>,
    /// `error.message`, when the SDK reported an error
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<Option<T>, AuthError> {
        match self.error {
            Some(message) => Err(AuthError::Provider(message)),
            None => Ok(self.data),
        }
    }
}

/// `data` of `getSession()`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub session: Option<Session>,
}

impl Envelope<SessionData> {
    pub fn into_session(self) -> Result<Option<Session>, AuthError> {
        Ok(self.into_result()?.and_then(|d| d.session))
    }
}

/// `signInWithOtp` credentials
#[derive(Debug, Clone, Serialize)]
pub struct OtpRequest<'a> {
    pub email: &'a str,
    pub options: OtpOptions<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OtpOptions<'a> {
    #[serde(rename = "emailRedirectTo")]
    pub email_redirect_to: &'a str,
}

impl<'a> OtpRequest<'a> {
    pub fn new(email: &'a str, redirect_to: &'a str) -> Self {
        Self {
            email,
            options: OtpOptions { email_redirect_to: redirect_to },
        }
    }
}
