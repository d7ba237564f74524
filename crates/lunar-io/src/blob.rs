//! Blob URL creation for uploaded images.
//!
//! Uploaded bytes are wrapped in a `Blob` and exposed to `<img>` and CSS
//! `background-image` through an object URL. The bytes are never
//! decoded; the MIME type is sniffed from the magic number.

use image::ImageFormat;
use lunar_view::ImageUrl;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating a Blob URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The upload contained no bytes.
    #[error("file is empty")]
    Empty,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// MIME type for image bytes.
///
/// Uses the content's magic number, then the filename extension, then
/// a generic binary type.
#[must_use]
pub fn sniff_mime(bytes: &[u8], filename: &str) -> &'static str {
    image::guess_format(bytes)
        .ok()
        .or_else(|| {
            filename
                .rsplit_once('.')
                .and_then(|(_, ext)| ImageFormat::from_extension(ext))
        })
        .map_or("application/octet-stream", |format| format.to_mime_type())
}

/// Wrap image bytes in a Blob and return its object URL.
///
/// The returned URL must be revoked via [`revoke_blob_url`] once no stage
/// refers to it.
///
/// # Errors
///
/// Returns [`BlobError::Empty`] for an empty upload.
/// Returns [`BlobError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], filename: &str) -> Result<ImageUrl, BlobError> {
    if bytes.is_empty() {
        return Err(BlobError::Empty);
    }

    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(sniff_mime(bytes, filename));
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(ImageUrl::new(url))
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`].
///
/// Best-effort: non-blob URLs are ignored and failures are dropped, since
/// the URL may already be gone.
pub fn revoke_blob_url(url: &ImageUrl) {
    if url.is_blob() {
        let _ = web_sys::Url::revoke_object_url(url.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
    const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0, 0];

    #[test]
    fn sniffs_from_magic_number() {
        assert_eq!(sniff_mime(PNG_MAGIC, "moon.jpg"), "image/png");
        assert_eq!(sniff_mime(JPEG_MAGIC, "moon"), "image/jpeg");
    }

    #[test]
    fn falls_back_to_extension() {
        assert_eq!(sniff_mime(&[1, 2, 3], "crater.WEBP"), "image/webp");
    }

    #[test]
    fn unknown_content_is_octet_stream() {
        assert_eq!(sniff_mime(&[1, 2, 3], "notes"), "application/octet-stream");
    }
}
