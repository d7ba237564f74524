//! Dioxus UI components for Lunar Unveiled.
//!
//! Provides the comparison viewer with its magnifier lenses, the stage
//! tab bar, the upload terminal, the export panel, and the footer clock.

mod clock;
mod export;
mod magnifier;
mod stage_tabs;
mod stage_viewer;
mod upload;

pub use clock::Clock;
pub use export::ExportPanel;
pub use magnifier::Magnifier;
pub use stage_tabs::StageTabs;
pub use stage_viewer::StageViewer;
pub use upload::FileUpload;
