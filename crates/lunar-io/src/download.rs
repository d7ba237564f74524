//! File download of an image URL.
//!
//! Dioxus has no built-in download API. This module triggers downloads by
//! programmatically clicking a temporary `<a download>` element pointing
//! at an already-displayable URL (a served path or a Blob URL).
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use lunar_view::ImageUrl;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// There is nothing to download.
    #[error("no image to download")]
    NoImage,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Download the image at `url` as `filename`.
///
/// The URL is not revoked afterwards: it still backs the on-screen panes.
///
/// # Errors
///
/// Returns [`DownloadError::NoImage`] for an empty URL and
/// [`DownloadError::JsError`] if any browser API call fails.
pub fn trigger_download(url: &ImageUrl, filename: &str) -> Result<(), DownloadError> {
    if url.is_empty() {
        return Err(DownloadError::NoImage);
    }

    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url.as_str());
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has started; a failed cleanup is not a failed download.
    let _ = body.remove_child(&anchor);

    tracing::info!(filename, "download started");
    Ok(())
}
