//! lunar-view: comparison viewer model (sans-IO).
//!
//! Everything the Lunar Unveiled viewer decides, without touching the
//! browser:
//!
//! * [`stage`]: the four restoration stages and their labels
//! * [`mapper`]: pointer → lens placement and zoomed background geometry
//! * [`lens`]: per-pane pointer tracking state
//! * [`resources`]: per-stage images with default/placeholder fallback
//! * [`viewer`]: the two-pane layout and busy overlay
//! * [`selector`]: single-choice stage selection
//! * [`session`]: host state for uploads and the simulated pipeline run
//! * [`config`]: JSON-loadable configuration
//!
//! Browser interaction and Dioxus components live in `lunar-io`.

pub mod config;
pub mod lens;
pub mod mapper;
pub mod resources;
pub mod selector;
pub mod session;
pub mod stage;
pub mod viewer;

pub use config::{ConfigError, ViewerConfig};
pub use lens::{LensOverlay, LensSettings, LensState};
pub use mapper::{LensProjection, PointerSample, Viewport, ZoomFactor};
pub use resources::{DefaultAssets, ImageUrl, StageImageMap};
pub use selector::{StageOption, StageSelection};
pub use session::{Session, UploadTicket};
pub use stage::StageId;
pub use viewer::{ComparisonLayout, PaneSide, PaneView, ViewerState};
