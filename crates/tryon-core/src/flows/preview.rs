//! Image Preview
//!
//! Thumbnail shown next to a file input once a file has been decoded.

use async_trait::async_trait;

/// A selected file that can be decoded into an `<img>` source
#[async_trait(?Send)]
pub trait PreviewSource {
    async fn data_url(&self) -> Result<String, String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The selection was cleared or empty
    NoSelection,
    Loaded(String),
    Unreadable(String),
}

impl PreviewOutcome {
    /// Only a decoded file replaces the current preview
    pub fn apply(self, preview: &mut Option<String>) {
        if let PreviewOutcome::Loaded(url) = self {
            *preview = Some(url);
        }
    }
}

/// Decode the first selected file, if any
pub async fn bind_preview<S: PreviewSource + ?Sized>(selected: Option<&S>) -> PreviewOutcome {
    let Some(source) = selected else {
        return PreviewOutcome::NoSelection;
    };
    match source.data_url().await {
        Ok(url) => PreviewOutcome::Loaded(url),
        Err(e) => PreviewOutcome::Unreadable(e),
    }
}
