//! Try-On Generation
//!
//! `Idle → Submitting → {Succeeded, Failed}`. The two terminal states are
//! interactive like `Idle` (loader hidden, trigger enabled) and additionally
//! show the result or the error panel.

use async_trait::async_trait;

use crate::error::{ApiError, ApiResult, ValidationError};
use crate::models::{GarmentSource, GenerationRequest, GenerationResult, ImageFile, StyleOptions};
use crate::traits::{AuthProvider, TryOnApi};

pub const INSUFFICIENT_CREDITS_MESSAGE: &str = "Insufficient credits. Buy more to continue styling!";
pub const GENERATION_FAILED_MESSAGE: &str = "Generation failed";
pub const UNREADABLE_IMAGE_MESSAGE: &str = "Could not read the selected image.";

/// Delay between revealing the result panel and scrolling it into view
pub const RESULT_SCROLL_DELAY_MS: u32 = 100;

/// Status code the backend uses for an exhausted credit balance
const PAYMENT_REQUIRED: u16 = 402;

/// A locally selected file that can be read into memory
#[async_trait(?Send)]
pub trait LocalImage {
    async fn read(&self) -> Result<ImageFile, String>;
}

#[async_trait(?Send)]
impl LocalImage for ImageFile {
    async fn read(&self) -> Result<ImageFile, String> {
        Ok(self.clone())
    }
}

/// Form state at the moment the trigger is pressed
#[derive(Debug, Clone)]
pub struct GenerationInputs<L> {
    pub base_image: Option<L>,
    pub garment_file: Option<L>,
    /// Current `src` of the garment preview image
    pub garment_preview_src: Option<String>,
    pub options: StyleOptions,
}

/// A garment preview counts as a remote garment when its source is an
/// `http(s)` URL rather than a local data URL.
pub fn is_remote_preview(src: &str) -> bool {
    src.starts_with("http")
}

/// Garment chosen for a request, before any file is read
#[derive(Debug, PartialEq, Eq)]
pub enum GarmentPick<'a, L> {
    File(&'a L),
    Url(&'a str),
}

/// Check the form and pick exactly one garment source. A selected file wins
/// over a (possibly stale) remote preview.
pub fn select_sources<L>(inputs: &GenerationInputs<L>) -> Result<(&L, GarmentPick<'_, L>), ValidationError> {
    let base = inputs.base_image.as_ref().ok_or(ValidationError::MissingBasePhoto)?;
    if let Some(file) = inputs.garment_file.as_ref() {
        return Ok((base, GarmentPick::File(file)));
    }
    match inputs.garment_preview_src.as_deref() {
        Some(src) if is_remote_preview(src) => Ok((base, GarmentPick::Url(src))),
        _ => Err(ValidationError::MissingGarment),
    }
}

/// Message for a failed `/generate` call. 402 gets its own wording even
/// though it is an ordinary client error on the wire.
pub fn failure_message(err: &ApiError) -> String {
    if err.status() == Some(PAYMENT_REQUIRED) {
        INSUFFICIENT_CREDITS_MESSAGE.to_string()
    } else {
        err.detail_or(GENERATION_FAILED_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Submitting,
    Succeeded(GenerationResult),
    Failed(String),
}

impl GenerationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, GenerationState::Submitting)
    }

    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// A new attempt may start from any non-submitting state
    pub fn can_start(&self) -> bool {
        self.trigger_enabled()
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            GenerationState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            GenerationState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn settle(result: ApiResult<GenerationResult>) -> Self {
        match result {
            Ok(result) => GenerationState::Succeeded(result),
            Err(e) => GenerationState::Failed(failure_message(&e)),
        }
    }

    /// State after `outcome`. Attempts stopped before submission leave the
    /// state untouched.
    pub fn after(self, outcome: &GenerationOutcome) -> Self {
        match outcome {
            GenerationOutcome::Completed(result) => GenerationState::settle(result.clone()),
            _ => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// No session; open the sign-in prompt
    SignInRequired,
    Rejected(ValidationError),
    /// A selected file could not be read
    Unreadable(String),
    /// Request went out; backend result
    Completed(ApiResult<GenerationResult>),
}

impl GenerationOutcome {
    pub fn alert(&self) -> Option<String> {
        match self {
            GenerationOutcome::Rejected(e) => Some(e.to_string()),
            GenerationOutcome::Unreadable(_) => Some(UNREADABLE_IMAGE_MESSAGE.to_string()),
            _ => None,
        }
    }

    /// Balance reported with a successful result
    pub fn remaining_credits(&self) -> Option<u32> {
        match self {
            GenerationOutcome::Completed(Ok(result)) => result.remaining_credits,
            _ => None,
        }
    }
}

/// Run one generation attempt.
///
/// Checks the session, validates the form, reads the selected files and
/// submits. `on_submitting` runs once, right before the request goes out;
/// nothing reaches the backend when any guard fails.
pub async fn run_generation<A, C, L, F>(auth: &A, api: &C, inputs: GenerationInputs<L>, on_submitting: F) -> GenerationOutcome
where
    A: AuthProvider + ?Sized,
    C: TryOnApi + ?Sized,
    L: LocalImage,
    F: FnOnce(),
{
    let Some(session) = super::current_session(auth).await else {
        return GenerationOutcome::SignInRequired;
    };

    let (base, garment) = match select_sources(&inputs) {
        Ok(picked) => picked,
        Err(e) => return GenerationOutcome::Rejected(e),
    };

    let base_image = match base.read().await {
        Ok(image) => image,
        Err(e) => return GenerationOutcome::Unreadable(e),
    };
    let garment = match garment {
        GarmentPick::File(file) => match file.read().await {
            Ok(image) => GarmentSource::File(image),
            Err(e) => return GenerationOutcome::Unreadable(e),
        },
        GarmentPick::Url(url) => GarmentSource::Url(url.to_string()),
    };

    let request = GenerationRequest { base_image, garment, options: inputs.options.clone() };

    on_submitting();
    GenerationOutcome::Completed(api.generate(&session.access_token, &request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::fakes::{FakeApi, FakeAuth};
    use crate::models::GarmentCategory;

    fn photo() -> ImageFile {
        ImageFile::new("me.jpg", "image/jpeg", vec![0xff, 0xd8])
    }

    fn garment() -> ImageFile {
        ImageFile::new("dress.png", "image/png", vec![0x89, 0x50])
    }

    fn inputs(
        base_image: Option<ImageFile>,
        garment_file: Option<ImageFile>,
        garment_preview_src: Option<&str>,
    ) -> GenerationInputs<ImageFile> {
        GenerationInputs {
            base_image,
            garment_file,
            garment_preview_src: garment_preview_src.map(str::to_string),
            options: StyleOptions::default(),
        }
    }

    fn success(credits: Option<u32>) -> ApiResult<GenerationResult> {
        Ok(GenerationResult { result_url: "https://cdn/result.png".into(), remaining_credits: credits })
    }

    /// Drive one attempt the way the studio panel does and return every
    /// state it passed through after `Idle`.
    async fn drive(auth: &FakeAuth, api: &FakeApi, inputs: GenerationInputs<ImageFile>) -> (GenerationOutcome, Vec<GenerationState>) {
        let mut history = Vec::new();
        let mut state = GenerationState::Idle;
        let outcome = run_generation(auth, api, inputs, || history.push(GenerationState::Submitting)).await;
        if history.last().is_some() {
            state = GenerationState::Submitting;
        }
        let next = state.clone().after(&outcome);
        if next != state {
            history.push(next);
        }
        (outcome, history)
    }

    #[tokio::test]
    async fn no_session_opens_sign_in_without_request() {
        let api = FakeApi { generate: success(Some(3)), ..Default::default() };

        let (outcome, history) = drive(&FakeAuth::signed_out(), &api, inputs(Some(photo()), Some(garment()), None)).await;

        assert_eq!(outcome, GenerationOutcome::SignInRequired);
        assert!(history.is_empty());
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_garment_is_rejected_before_request() {
        let api = FakeApi { generate: success(None), ..Default::default() };

        let local_preview = Some("data:image/png;base64,AAAA");
        let (outcome, history) = drive(&FakeAuth::signed_in("tok"), &api, inputs(Some(photo()), None, local_preview)).await;

        assert_eq!(outcome, GenerationOutcome::Rejected(ValidationError::MissingGarment));
        assert_eq!(
            outcome.alert().as_deref(),
            Some("Please upload a garment image or fetch one from a URL.")
        );
        assert!(history.is_empty());
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_base_photo_is_rejected() {
        let api = FakeApi { generate: success(None), ..Default::default() };

        let (outcome, _) = drive(&FakeAuth::signed_in("tok"), &api, inputs(None, Some(garment()), None)).await;

        assert_eq!(outcome, GenerationOutcome::Rejected(ValidationError::MissingBasePhoto));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn garment_file_wins_over_stale_url() {
        let api = FakeApi { generate: success(Some(9)), ..Default::default() };
        let stale = Some("https://cdn.shop/old-dress.jpg");

        let (outcome, history) = drive(&FakeAuth::signed_in("tok"), &api, inputs(Some(photo()), Some(garment()), stale)).await;

        assert_eq!(outcome.remaining_credits(), Some(9));
        assert_eq!(history.len(), 2);
        let sent = api.last_generation.borrow().clone().expect("request sent");
        assert_eq!(sent.base_image, photo());
        assert_eq!(sent.garment, GarmentSource::File(garment()));
        assert_eq!(api.calls.borrow()[0].token.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn remote_preview_is_sent_as_url() {
        let api = FakeApi { generate: success(None), ..Default::default() };
        let mut form = inputs(Some(photo()), None, Some("https://cdn.shop/dress.jpg"));
        form.options.garment_category = GarmentCategory::OnePiece;
        form.options.add_train = true;

        let (outcome, _) = drive(&FakeAuth::signed_in("tok"), &api, form).await;

        assert!(matches!(outcome, GenerationOutcome::Completed(Ok(_))));
        assert_eq!(outcome.remaining_credits(), None);
        let sent = api.last_generation.borrow().clone().expect("request sent");
        assert_eq!(sent.garment, GarmentSource::Url("https://cdn.shop/dress.jpg".into()));
        assert_eq!(sent.options.garment_category, GarmentCategory::OnePiece);
        assert!(sent.options.add_train);
    }

    #[tokio::test]
    async fn payment_required_gets_credit_message() {
        let api = FakeApi {
            generate: Err(ApiError::Status { status: 402, detail: Some("Payment Required".into()) }),
            ..Default::default()
        };

        let (_, history) = drive(&FakeAuth::signed_in("tok"), &api, inputs(Some(photo()), Some(garment()), None)).await;

        assert_eq!(history.last(), Some(&GenerationState::Failed(INSUFFICIENT_CREDITS_MESSAGE.into())));
    }

    #[test]
    fn payment_required_never_uses_fallback() {
        for detail in [None, Some("whatever".to_string())] {
            let err = ApiError::Status { status: 402, detail };
            assert_eq!(failure_message(&err), INSUFFICIENT_CREDITS_MESSAGE);
        }
    }

    #[test]
    fn other_failures_use_detail_or_fallback() {
        let with_detail = ApiError::Status { status: 500, detail: Some("Model timed out".into()) };
        assert_eq!(failure_message(&with_detail), "Model timed out");

        let bare = ApiError::Status { status: 400, detail: None };
        assert_eq!(failure_message(&bare), GENERATION_FAILED_MESSAGE);

        let network = ApiError::Network("Failed to fetch".into());
        assert_eq!(failure_message(&network), GENERATION_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn every_submitted_attempt_releases_trigger_once() {
        let results = [
            success(Some(1)),
            Err(ApiError::Status { status: 402, detail: None }),
            Err(ApiError::Status { status: 500, detail: Some("boom".into()) }),
            Err(ApiError::Network("offline".into())),
        ];
        for result in results {
            let api = FakeApi { generate: result, ..Default::default() };

            let (_, history) = drive(&FakeAuth::signed_in("tok"), &api, inputs(Some(photo()), Some(garment()), None)).await;

            assert_eq!(history.len(), 2, "{:?}", history);
            assert!(history[0].is_loading());
            assert!(!history[1].is_loading());
            assert!(history[1].trigger_enabled());
            assert_eq!(history.iter().filter(|s| s.is_loading()).count(), 1);
        }
    }

    #[test]
    fn submitting_blocks_new_attempt() {
        assert!(!GenerationState::Submitting.can_start());
        assert!(GenerationState::Failed("x".into()).can_start());
        assert!(GenerationState::Idle.can_start());
    }

    #[test]
    fn remote_preview_check_is_prefix_only() {
        assert!(is_remote_preview("https://cdn/x.jpg"));
        assert!(is_remote_preview("http://cdn/x.jpg"));
        assert!(!is_remote_preview("data:image/png;base64,AA"));
        assert!(!is_remote_preview(""));
    }

    struct Unreadable;

    #[async_trait(?Send)]
    impl LocalImage for Unreadable {
        async fn read(&self) -> Result<ImageFile, String> {
            Err("NotReadableError".to_string())
        }
    }

    #[tokio::test]
    async fn unreadable_file_stops_before_request() {
        let api = FakeApi { generate: success(None), ..Default::default() };
        let form = GenerationInputs {
            base_image: Some(Unreadable),
            garment_file: None,
            garment_preview_src: Some("https://cdn/x.jpg".to_string()),
            options: StyleOptions::default(),
        };

        let outcome = run_generation(&FakeAuth::signed_in("tok"), &api, form, || {}).await;

        assert_eq!(outcome, GenerationOutcome::Unreadable("NotReadableError".into()));
        assert_eq!(outcome.alert().as_deref(), Some(UNREADABLE_IMAGE_MESSAGE));
        assert_eq!(api.call_count(), 0);
    }
}
