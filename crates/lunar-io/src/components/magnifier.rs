//! Circular magnifier lens that follows the pointer over a pane.

use dioxus::prelude::*;
use lunar_view::{ImageUrl, LensSettings, LensState, ViewerConfig};

use crate::dom;

/// Props for the [`Magnifier`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MagnifierProps {
    /// DOM id of the tracked region; must be unique on the page.
    id: String,
    /// Image shown magnified inside the lens.
    image: ImageUrl,
    /// Zoom and diameter of the lens.
    settings: LensSettings,
}

/// Transparent region covering a pane that draws a magnifier lens under
/// the pointer.
///
/// Each instance owns its own [`LensState`]; two magnifiers never share
/// pointer state. The lens element exists only while the pointer is over
/// the region and is itself `pointer-events: none`, so it never steals
/// the events that move it.
#[component]
pub fn Magnifier(props: MagnifierProps) -> Element {
    let config: ViewerConfig = use_context();
    let mut lens = use_signal(LensState::default);
    let tracked = props.id.clone();

    let overlay = lens
        .read()
        .overlay(props.settings, &props.image, &config.assets);

    rsx! {
        div {
            id: "{props.id}",
            class: "magnifier",
            role: "img",
            aria_label: "Magnifier region",
            onmousemove: move |evt: Event<MouseData>| {
                // Unmounted between the event and the handler.
                let Some(metrics) = dom::measure(&tracked) else {
                    return;
                };
                let client = evt.client_coordinates();
                lens.write()
                    .pointer_move(metrics.sample_at(client.x, client.y), metrics.viewport);
            },
            onmouseleave: move |_| lens.write().pointer_leave(),

            if let Some(overlay) = overlay {
                div {
                    class: "magnifier-lens",
                    style: "{overlay.style()}",
                }
            }
        }
    }
}
