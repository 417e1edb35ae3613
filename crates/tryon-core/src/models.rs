//! Client Models
//!
//! Data structures exchanged with the backend and the auth provider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated session as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
}

impl Session {
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

/// `/user/profile` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub credits: u32,
}

fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}

/// `/generate` success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub result_url: String,
    #[serde(default)]
    pub remaining_credits: Option<u32>,
}

/// One entry of the `/gallery` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub result_url: String,
}

/// `/extract-image` success response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedImage {
    pub image_url: String,
}

/// `/checkout` response; the redirect URL may be absent
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(default)]
    pub url: Option<String>,
}

/// Error body returned by the backend on non-success statuses
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Human-readable detail. Validation errors come back as structured
    /// JSON and are shown as their JSON text.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// A locally selected image, read into memory for upload
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        let mime = mime.into();
        Self {
            name: name.into(),
            mime: if mime.is_empty() { "application/octet-stream".to_string() } else { mime },
            bytes,
        }
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Where the garment reference comes from. Exactly one source per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GarmentSource {
    File(ImageFile),
    Url(String),
}

/// Garment categories understood by the generation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GarmentCategory {
    #[default]
    #[serde(rename = "tops")]
    Tops,
    #[serde(rename = "bottoms")]
    Bottoms,
    #[serde(rename = "one-piece")]
    OnePiece,
}

impl GarmentCategory {
    pub const ALL: [GarmentCategory; 3] = [Self::Tops, Self::Bottoms, Self::OnePiece];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::OnePiece => "one-piece",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tops => "Top / Shirt",
            Self::Bottoms => "Pants / Skirt",
            Self::OnePiece => "Dress / Jumpsuit",
        }
    }
}

impl FromStr for GarmentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown garment category: {}", s))
    }
}

/// Styling options sent alongside every generation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleOptions {
    pub garment_category: GarmentCategory,
    pub preserve_shoes: bool,
    pub add_train: bool,
    pub modesty_mode: bool,
    pub custom_prompt: String,
}

/// Fully validated `/generate` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub base_image: ImageFile,
    pub garment: GarmentSource,
    pub options: StyleOptions,
}

/// A purchasable credit pack shown on the pricing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: u32,
    pub price_label: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan { id: "starter", name: "Starter", credits: 10, price_label: "$5" },
    Plan { id: "pro", name: "Pro", credits: 50, price_label: "$19" },
    Plan { id: "studio", name: "Studio", credits: 200, price_label: "$59" },
];
