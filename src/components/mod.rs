//! UI Components
//!
//! Reusable Leptos components.

mod auth_modal;
mod gallery;
mod header;
mod image_input;
mod pricing;
mod studio;
mod style_options;
mod url_fetcher;

pub use auth_modal::AuthModal;
pub use gallery::GalleryPage;
pub use header::Header;
pub use image_input::ImageInput;
pub use pricing::PricingPage;
pub use studio::Studio;
pub use style_options::StyleOptionsPanel;
pub use url_fetcher::UrlFetcher;
