//! lunar-io: Browser I/O and Dioxus component library.
//!
//! Handles file uploads into Blob URLs, image downloads, pane
//! measurement for pointer tracking, and provides the UI components of
//! the Lunar Unveiled web application.

pub mod blob;
pub mod components;
pub mod dom;
pub mod download;

pub use components::{Clock, ExportPanel, FileUpload, Magnifier, StageTabs, StageViewer};
