//! Upload terminal: drag-and-drop zone with a file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use lunar_view::ImageUrl;

use crate::blob;

/// Allowed file extensions for image uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp", "gif", "tif", "tiff"];

/// Check whether a filename has an allowed image extension.
fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the Blob URL of the uploaded image.
    on_upload: EventHandler<ImageUrl>,
}

/// A drag-and-drop zone with a file picker button.
///
/// The first dropped or picked image is wrapped in a Blob URL and passed
/// to `on_upload`. Only the first file of a multi-file drop is used.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);

    // Shared by the picker and drag-and-drop paths.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        if !has_allowed_extension(&name) {
            tracing::warn!(%name, "rejected upload with unsupported extension");
            error.set(Some(format!("Unsupported file type: {name}")));
            return;
        }
        let url = match file.read_bytes().await {
            Ok(bytes) => blob::bytes_to_blob_url(&bytes, &name),
            Err(e) => {
                error.set(Some(format!("Failed to read file: {e}")));
                return;
            }
        };
        match url {
            Ok(url) => {
                tracing::info!(%name, "upload accepted");
                filename.set(Some(name));
                error.set(None);
                props.on_upload.call(url);
            }
            Err(e) => {
                tracing::warn!(%name, "upload failed: {e}");
                error.set(Some(format!("Failed to load {name}: {e}")));
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        evt.stop_propagation();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "drop-zone drop-zone-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            p { class: "drop-title", "Drag & Drop Raw Image File Here" }
            p { class: "muted small", "or" }

            label { class: "button",
                input {
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: handle_files,
                }
                Icon { width: 16, height: 16, icon: LdUpload }
                "Upload Raw Image"
            }

            if let Some(ref name) = filename() {
                p { class: "text-success small", "Loaded: {name}" }
            }

            if let Some(ref err) = error() {
                p { class: "text-error small", "{err}" }
            }
        }
        p { class: "muted small hint",
            "Tip: Use any large grayscale or RGB image; this demo simulates the pipeline."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_extensions_case_insensitively() {
        assert!(has_allowed_extension("crater.PNG"));
        assert!(has_allowed_extension("shadowed.region.jpeg"));
        assert!(has_allowed_extension("mosaic.tif"));
    }

    #[test]
    fn rejects_other_files() {
        assert!(!has_allowed_extension("readme"));
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("archive.png.zip"));
    }
}
