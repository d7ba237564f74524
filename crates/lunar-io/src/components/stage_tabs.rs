//! Tab bar for choosing the stage shown in the right-hand pane.

use dioxus::prelude::*;
use lunar_view::{StageId, StageOption, StageSelection};

/// Props for the [`StageTabs`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StageTabsProps {
    /// Currently active stage (controlled by the host).
    active: StageId,
    /// Fired with the newly chosen stage when the selection changes.
    on_select: EventHandler<StageId>,
}

/// Four mutually exclusive stage tabs in pipeline order.
#[component]
pub fn StageTabs(props: StageTabsProps) -> Element {
    let selection = StageSelection::new(props.active);

    rsx! {
        div { class: "tabs", role: "tablist",
            for option in selection.options() {
                {render_tab(option, props.on_select)}
            }
        }
    }
}

/// Render a single tab.
fn render_tab(option: StageOption, on_select: EventHandler<StageId>) -> Element {
    let class = if option.active { "tab tab-active" } else { "tab" };
    let stage = option.stage;

    let onclick = move |_: MouseEvent| {
        if let Some(chosen) = option.click() {
            on_select.call(chosen);
        }
    };

    rsx! {
        button {
            class: "{class}",
            role: "tab",
            "aria-selected": "{option.active}",
            title: "Show {stage.label()} stage",
            onclick: onclick,
            "{stage.label()}"
        }
    }
}
