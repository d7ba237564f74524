//! Export controls with the reconstructed-image download button.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use lunar_view::ImageUrl;

use crate::download;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Image to download. `None` disables the button.
    image: Option<ImageUrl>,
    /// Filename offered to the browser.
    filename: String,
}

/// Download button for the most processed image available.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let has_image = props.image.is_some();
    let mut export_error = use_signal(|| Option::<String>::None);

    let onclick = {
        let image = props.image.clone();
        let filename = props.filename.clone();
        move |_| {
            let Some(ref url) = image else {
                return;
            };
            match download::trigger_download(url, &filename) {
                Ok(()) => export_error.set(None),
                Err(e) => {
                    tracing::warn!("download failed: {e}");
                    export_error.set(Some(format!("Download failed: {e}")));
                }
            }
        }
    };

    rsx! {
        div { class: "export",
            button {
                class: if has_image { "button" } else { "button button-disabled" },
                disabled: !has_image,
                onclick: onclick,
                Icon { width: 16, height: 16, icon: LdDownload }
                "Download Reconstructed Image"
            }

            if let Some(ref err) = export_error() {
                p { class: "text-error small", "{err}" }
            }
        }
    }
}
