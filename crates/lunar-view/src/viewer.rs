//! Layout of the two-pane comparison viewer.
//!
//! The left pane is always the baseline stage; the right pane shows the
//! selected stage and carries the busy overlay while a run is in flight.
//! [`ComparisonLayout::new`] is a pure function of its inputs, so the
//! component rendering it only needs to diff props.

use crate::resources::{self, DefaultAssets, ImageUrl, StageImageMap};
use crate::stage::StageId;

/// Host-owned viewer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewerState {
    /// Stage shown in the right-hand pane.
    pub selected: StageId,
    /// Whether the pipeline is still computing.
    pub processing: bool,
}

/// Status line shown on the busy overlay.
pub const BUSY_MESSAGE: &str = "Reconstructing Terrain... AI Core Engaged.";

/// Which side of the viewer a pane sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSide {
    /// Left, locked to the baseline stage.
    Baseline,
    /// Right, follows the selection.
    Selected,
}

impl PaneSide {
    /// DOM id of the pane's magnifier region inside viewer number
    /// `viewer`. Unique per viewer and side.
    #[must_use]
    pub fn magnifier_id(self, viewer: u32) -> String {
        let side = match self {
            Self::Baseline => "baseline",
            Self::Selected => "selected",
        };
        format!("magnifier-{viewer}-{side}")
    }
}

/// Everything needed to render one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    /// Which side this pane is on.
    pub side: PaneSide,
    /// Stage shown in the pane.
    pub stage: StageId,
    /// Resolved image for the pane.
    pub image: ImageUrl,
    /// Heading above the pane.
    pub title: String,
    /// Whether the busy overlay covers this pane.
    pub busy: bool,
    /// Whether this pane hosts a magnifier lens.
    pub magnifier: bool,
}

impl PaneView {
    /// Alt text for the pane image.
    #[must_use]
    pub fn alt_text(&self) -> String {
        match self.side {
            PaneSide::Baseline => "RAW Data baseline image".to_owned(),
            PaneSide::Selected => format!("{} stage image", self.stage.label()),
        }
    }
}

/// Both panes of the comparison viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonLayout {
    /// Left pane, always [`StageId::Baseline`].
    pub baseline: PaneView,
    /// Right pane, the selected stage.
    pub selected: PaneView,
}

impl ComparisonLayout {
    /// Resolve both panes.
    #[must_use]
    pub fn new(
        state: ViewerState,
        images: &StageImageMap,
        defaults: &DefaultAssets,
        show_magnifier: bool,
    ) -> Self {
        let baseline = PaneView {
            side: PaneSide::Baseline,
            stage: StageId::Baseline,
            image: resources::resolve(images, defaults, StageId::Baseline),
            title: "RAW Data".to_owned(),
            busy: false,
            magnifier: show_magnifier,
        };
        let selected = PaneView {
            side: PaneSide::Selected,
            stage: state.selected,
            image: resources::resolve(images, defaults, state.selected),
            title: format!("{} Processed", state.selected.code()),
            busy: state.processing,
            magnifier: show_magnifier,
        };
        Self { baseline, selected }
    }

    /// Panes in left-to-right order.
    #[must_use]
    pub const fn panes(&self) -> [&PaneView; 2] {
        [&self.baseline, &self.selected]
    }
}
