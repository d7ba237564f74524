//! Pointer-to-background projection for the magnifier lens.
//!
//! Maps a pointer position inside a pane to:
//!
//! 1. a normalized `[0, 1] × [0, 1]` image coordinate, and
//! 2. the CSS `background-size` / `background-position` percentages that
//!    put the magnified image point under the pointer at the lens center.
//!
//! Everything here is pure arithmetic and cheap enough to run on every
//! `mousemove` without throttling.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Default lens diameter in CSS pixels.
pub const DEFAULT_LENS_DIAMETER: f64 = 128.0;

/// Default magnification.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Measured size of the tracked pane, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Client width of the pane.
    pub width: f64,
    /// Client height of the pane.
    pub height: f64,
}

impl Viewport {
    /// Create a new viewport.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `sample` lies inside the pane, edges included.
    ///
    /// Each axis is checked on its own: an axis without a positive size
    /// accepts any finite coordinate, a measured axis rejects anything
    /// outside `0..=extent`.
    #[must_use]
    pub fn contains(self, sample: PointerSample) -> bool {
        within_axis(sample.x, self.width) && within_axis(sample.y, self.height)
    }
}

/// Bounds check for one axis of [`Viewport::contains`].
fn within_axis(value: f64, extent: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if extent > 0.0 {
        (0.0..=extent).contains(&value)
    } else {
        true
    }
}

/// Pointer position relative to the pane's top-left corner, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Horizontal offset from the pane's left edge.
    pub x: f64,
    /// Vertical offset from the pane's top edge.
    pub y: f64,
}

impl PointerSample {
    /// Create a new sample.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Magnification applied inside the lens. Always finite and at least 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ZoomFactor(f64);

impl ZoomFactor {
    /// Create a zoom factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidZoom`] if `value` is below 1 or not
    /// finite.
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if value.is_finite() && value >= 1.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidZoom(value))
        }
    }

    /// Create a zoom factor, clamping out-of-range values to 1 and
    /// replacing non-finite values with [`DEFAULT_ZOOM`].
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_finite() {
            Self(value.max(1.0))
        } else {
            Self(DEFAULT_ZOOM)
        }
    }

    /// The raw factor.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM)
    }
}

impl TryFrom<f64> for ZoomFactor {
    type Error = ConfigError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ZoomFactor> for f64 {
    fn from(zoom: ZoomFactor) -> Self {
        zoom.0
    }
}

/// Placement of the lens and its magnified background.
///
/// Percentages are CSS percentages (`200.0` means `200%`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensProjection {
    /// Lens `left` in pixels, relative to the pane.
    pub left: f64,
    /// Lens `top` in pixels, relative to the pane.
    pub top: f64,
    /// `background-size` on both axes, in percent.
    pub background_size: f64,
    /// Horizontal `background-position`, in percent.
    pub background_x: f64,
    /// Vertical `background-position`, in percent.
    pub background_y: f64,
}

/// Replace a zero, negative, or non-finite extent with 1.
///
/// Panes report zero size before their first layout; the projection must
/// stay finite in that window.
fn guarded_extent(extent: f64) -> f64 {
    if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        1.0
    }
}

/// Normalize a pointer sample to `[0, 1] × [0, 1]` image space.
///
/// For samples inside a measured viewport both components lie in
/// `[0, 1]`. An unmeasured side divides by 1 instead of 0.
#[must_use]
pub fn normalize(viewport: Viewport, sample: PointerSample) -> (f64, f64) {
    (
        sample.x / guarded_extent(viewport.width),
        sample.y / guarded_extent(viewport.height),
    )
}

/// Project a pointer sample into lens placement and background geometry.
///
/// * `left, top = x - r, y - r` centers the lens on the pointer.
/// * `background-size = z · 100%` renders the image at `z` times the pane.
/// * `background-position = -(x / W) · (z - 1) · 100%` (and likewise for
///   `y`) slides the magnified image so the point under the pointer sits
///   at the lens center.
#[must_use]
pub fn project(
    viewport: Viewport,
    sample: PointerSample,
    zoom: ZoomFactor,
    radius: f64,
) -> LensProjection {
    let (u, v) = normalize(viewport, sample);
    let travel = (zoom.get() - 1.0) * 100.0;

    // Adding 0.0 turns -0.0 into 0.0 so styles never print "-0%".
    LensProjection {
        left: sample.x - radius,
        top: sample.y - radius,
        background_size: zoom.get() * 100.0,
        background_x: -(u * travel) + 0.0,
        background_y: -(v * travel) + 0.0,
    }
}
