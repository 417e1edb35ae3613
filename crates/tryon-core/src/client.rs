//! Backend HTTP Client
//!
//! `reqwest` implementation of [`TryOnApi`]. On `wasm32` reqwest drives the
//! browser's `fetch`, so the same code serves the page and native tests.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    CheckoutSession, ExtractedImage, GalleryItem, GarmentSource, GenerationRequest, GenerationResult, ImageFile,
    Profile,
};
use crate::traits::TryOnApi;

/// Backend endpoint URLs, resolved against a base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// `base` may carry a path prefix (`https://host/api`); endpoints are
    /// appended below it.
    pub fn new(base: &str) -> ApiResult<Self> {
        let mut base = Url::parse(base).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base, e)))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    fn join(&self, path: &str) -> ApiResult<Url> {
        self.base.join(path).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    pub fn profile(&self) -> ApiResult<Url> {
        self.join("user/profile")
    }

    pub fn extract_image(&self) -> ApiResult<Url> {
        self.join("extract-image")
    }

    pub fn generate(&self) -> ApiResult<Url> {
        self.join("generate")
    }

    pub fn gallery(&self) -> ApiResult<Url> {
        self.join("gallery")
    }

    pub fn checkout(&self, plan: &str) -> ApiResult<Url> {
        let mut url = self.join("checkout")?;
        url.query_pairs_mut().append_pair("plan", plan);
        Ok(url)
    }
}

/// Multipart field names and values for a generation request, in send order.
/// Text fields only; the binary parts are added by [`generation_form`].
pub fn generation_text_fields(request: &GenerationRequest) -> Vec<(&'static str, String)> {
    let options = &request.options;
    let mut fields = Vec::with_capacity(6);
    if let GarmentSource::Url(url) = &request.garment {
        fields.push(("garment_url", url.clone()));
    }
    fields.push(("garment_category", options.garment_category.as_str().to_string()));
    fields.push(("preserve_shoes", options.preserve_shoes.to_string()));
    fields.push(("add_train", options.add_train.to_string()));
    fields.push(("modesty_mode", options.modesty_mode.to_string()));
    fields.push(("custom_prompt", options.custom_prompt.clone()));
    fields
}

fn file_part(file: &ImageFile) -> ApiResult<Part> {
    Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(&file.mime)
        .map_err(ApiError::from)
}

fn generation_form(request: &GenerationRequest) -> ApiResult<Form> {
    let mut form = Form::new().part("base_image", file_part(&request.base_image)?);
    if let GarmentSource::File(garment) = &request.garment {
        form = form.part("garment_image", file_part(garment)?);
    }
    for (name, value) in generation_text_fields(request) {
        form = form.text(name, value);
    }
    Ok(form)
}

/// Decode a success body, or turn the response into [`ApiError::Status`]
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()));
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status.as_u16(), &body))
}

/// Try-on backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpTryOnApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTryOnApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { client: Client::new(), endpoints }
    }
}

#[async_trait(?Send)]
impl TryOnApi for HttpTryOnApi {
    async fn profile(&self, token: &str) -> ApiResult<Profile> {
        let response = self.client.get(self.endpoints.profile()?).bearer_auth(token).send().await?;
        read_json(response).await
    }

    async fn extract_image(&self, url: &str) -> ApiResult<ExtractedImage> {
        let form = Form::new().text("url", url.to_string());
        let response = self.client.post(self.endpoints.extract_image()?).multipart(form).send().await?;
        read_json(response).await
    }

    async fn generate(&self, token: &str, request: &GenerationRequest) -> ApiResult<GenerationResult> {
        let form = generation_form(request)?;
        let response = self
            .client
            .post(self.endpoints.generate()?)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        read_json(response).await
    }

    async fn gallery(&self, token: &str) -> ApiResult<Vec<GalleryItem>> {
        let response = self.client.get(self.endpoints.gallery()?).bearer_auth(token).send().await?;
        read_json(response).await
    }

    async fn checkout(&self, token: &str, plan: &str) -> ApiResult<CheckoutSession> {
        let response = self.client.post(self.endpoints.checkout(plan)?).bearer_auth(token).send().await?;
        read_json(response).await
    }
}
