use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use lunar_io::{Clock, ExportPanel, FileUpload, StageTabs, StageViewer, blob};
use lunar_view::{ImageUrl, Session, StageId, ViewerConfig};

/// Viewer configuration bundled with the app.
const CONFIG_JSON: &str = include_str!("../lunar.json");

fn main() {
    dioxus::launch(app);
}

/// Parse the bundled configuration, falling back to defaults.
fn load_config() -> ViewerConfig {
    ViewerConfig::from_json(CONFIG_JSON).unwrap_or_else(|e| {
        tracing::warn!("ignoring bundled config: {e}");
        ViewerConfig::default()
    })
}

/// Root application component.
///
/// Owns the [`Session`] (stage images, selection, processing flag) in a
/// signal and provides the [`ViewerConfig`] as context for the viewer
/// components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    let config = use_context_provider(load_config);
    let mut session = use_signal(|| Session::new(config.initial_stage));

    // --- Upload handler ---
    // Starts the simulated run and completes it after the configured
    // delay. A newer upload bumps the generation, so an older timer that
    // fires late is ignored by `complete_run`.
    let delay_ms = config.simulated_delay_ms;
    let on_upload = move |url: ImageUrl| {
        let ticket = session.write().begin_upload(url);
        if let Some(ref old) = ticket.retired {
            blob::revoke_blob_url(old);
        }
        spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            session.write().complete_run(ticket.generation);
        });
    };

    // --- Stage select handler ---
    let on_stage_select = move |stage: StageId| {
        session.write().select(stage);
    };

    let current = session.read();
    let final_image = current.final_image(&config.assets);

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/lunar.css") }

        main { class: "page",
            header { class: "site-header",
                h1 { class: "title",
                    span { class: "title-accent", "Lunar" }
                    " "
                    span { class: "title-plain", "Unveiled" }
                }
            }

            section { class: "content",
                // Left control panel
                div { class: "sidebar",
                    div { class: "card",
                        h2 { class: "card-title", "Upload Terminal" }
                        FileUpload { on_upload: on_upload }
                    }

                    div { class: "card",
                        h2 { class: "card-title", "Mission Briefing" }
                        p { class: "muted",
                            "Our objective is to reconstruct invisible geology from the Moon's \
                             Permanently Shadowed Regions. Using a custom-trained AI to repaint \
                             damaged data, we can identify critical resources like water ice, \
                             paving the way for future lunar missions."
                        }
                    }

                    div { class: "card",
                        h2 { class: "card-title", "Technical Schematics" }
                        ul { class: "muted schematics",
                            li { "AI Reconstruction: Stable Diffusion XL + LoRA" }
                            li { "Super-Resolution: SwinIR Transformer" }
                            li { "Pre-processing: CLAHE" }
                            li { "Data Source: ISRO's Chandrayaan-2" }
                        }
                    }

                    div { class: "card",
                        h2 { class: "card-title", "Export Controls" }
                        ExportPanel {
                            image: final_image,
                            filename: config.download_filename.clone(),
                        }
                    }
                }

                // Unified visualizer
                div { class: "visualizer",
                    StageViewer {
                        state: current.viewer_state(),
                        images: current.images().clone(),
                        show_magnifier: config.show_magnifier,
                    }

                    div { class: "card",
                        h2 { class: "card-title", "Processing Stages" }
                        StageTabs {
                            active: current.selected(),
                            on_select: on_stage_select,
                        }
                        hr { class: "separator" }
                        p { class: "muted small",
                            "Hover either image to magnify it, or select a stage to update the view."
                        }
                    }
                }
            }

            footer { class: "site-footer",
                span { "Team: Lunar Unveiled" }
                Clock {}
            }
        }
    }
}
