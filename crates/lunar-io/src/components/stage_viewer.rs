//! Side-by-side comparison of the baseline stage and the selected stage.

use std::sync::atomic::{AtomicU32, Ordering};

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use lunar_view::viewer::BUSY_MESSAGE;
use lunar_view::{
    ComparisonLayout, LensSettings, PaneSide, PaneView, StageImageMap, ViewerConfig, ViewerState,
};

use super::magnifier::Magnifier;

/// Number handed to the next mounted viewer, keeping magnifier ids unique
/// when several viewers share a page.
static NEXT_VIEWER: AtomicU32 = AtomicU32::new(0);

/// Props for the [`StageViewer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StageViewerProps {
    /// Selected stage and processing flag, owned by the host.
    state: ViewerState,
    /// Host-owned stage → image mapping; unset stages use configured
    /// defaults.
    images: StageImageMap,
    /// Whether both panes host a magnifier lens.
    #[props(default = true)]
    show_magnifier: bool,
}

/// Two-pane viewer: baseline on the left, selected stage on the right.
///
/// Panes are resolved by [`ComparisonLayout::new`]; switching stages
/// swaps the right image immediately. While `state.processing` is set,
/// a busy overlay covers the right pane only.
#[component]
pub fn StageViewer(props: StageViewerProps) -> Element {
    let config: ViewerConfig = use_context();
    let viewer = use_hook(|| NEXT_VIEWER.fetch_add(1, Ordering::Relaxed));
    let layout = ComparisonLayout::new(
        props.state,
        &props.images,
        &config.assets,
        props.show_magnifier,
    );
    let settings = config.lens();

    rsx! {
        div { class: "viewer",
            for pane in layout.panes() {
                {render_pane(viewer, pane, settings)}
            }
        }
    }
}

/// Render one pane with its heading, image, lens and overlay.
fn render_pane(viewer: u32, pane: &PaneView, settings: LensSettings) -> Element {
    let title_class = match pane.side {
        PaneSide::Baseline => "pane-title",
        PaneSide::Selected => "pane-title pane-title-active",
    };
    rsx! {
        div { class: "pane",
            div { class: "{title_class}", "{pane.title}" }
            div { class: "pane-frame",
                img {
                    src: "{pane.image}",
                    alt: "{pane.alt_text()}",
                    class: "pane-image",
                    draggable: "false",
                }
                if pane.magnifier {
                    Magnifier {
                        id: pane.side.magnifier_id(viewer),
                        image: pane.image.clone(),
                        settings,
                    }
                }
                if pane.busy {
                    {render_busy_overlay()}
                }
            }
        }
    }
}

/// Non-interactive spinner and status text centered over a pane.
fn render_busy_overlay() -> Element {
    rsx! {
        div { class: "busy-overlay", role: "status",
            div { class: "busy-card",
                Icon { class: "spinner", width: 28, height: 28, icon: LdLoader }
                div { class: "busy-text", "{BUSY_MESSAGE}" }
            }
        }
    }
}
