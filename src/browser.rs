//! Browser Helpers
//!
//! Thin wrappers over window APIs used by the flows: alerts, navigation,
//! scrolling and local file reading.

use async_trait::async_trait;
use js_sys::{Promise, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use tryon_core::flows::{LocalImage, PreviewSource};
use tryon_core::models::ImageFile;

pub fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

/// Blocking alert, as used for validation and request errors
pub fn alert(message: &str) {
    if let Ok(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Page origin, e.g. `https://studio.example`
pub fn origin() -> Result<String, String> {
    window()?.location().origin().map_err(js_err)
}

pub fn navigate(url: &str) -> Result<(), String> {
    window()?.location().set_href(url).map_err(js_err)
}

pub fn reload() {
    if let Ok(w) = window() {
        let _ = w.location().reload();
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport
pub fn scroll_into_view(id: &str) {
    let Some(element) = window().ok().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// First file selected in a file input
pub fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Decode `file` into a `data:` URL for previews
pub async fn read_data_url(file: &File) -> Result<String, String> {
    let reader = FileReader::new().map_err(js_err)?;
    let promise = Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &done.result().unwrap_or(JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("file could not be read"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(file).map_err(js_err)?;

    let result = JsFuture::from(promise).await.map_err(js_err)?;
    result.as_string().ok_or_else(|| "reader produced no data URL".to_string())
}

/// A file picked in the page, read lazily when a request is built
pub struct BrowserFile(pub File);

#[async_trait(?Send)]
impl LocalImage for BrowserFile {
    async fn read(&self) -> Result<ImageFile, String> {
        let buffer = JsFuture::from(self.0.array_buffer()).await.map_err(js_err)?;
        let bytes = Uint8Array::new(&buffer).to_vec();
        Ok(ImageFile::new(self.0.name(), self.0.type_(), bytes))
    }
}

#[async_trait(?Send)]
impl PreviewSource for BrowserFile {
    async fn data_url(&self) -> Result<String, String> {
        read_data_url(&self.0).await
    }
}
