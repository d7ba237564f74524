//! Magnifier lens state.
//!
//! A [`LensState`] belongs to exactly one pane. Pointer moves overwrite
//! the stored sample (last write wins), pointer leave clears it, and
//! [`LensState::overlay`] turns the current sample into at most one
//! renderable [`LensOverlay`].

use crate::mapper::{self, LensProjection, PointerSample, Viewport, ZoomFactor};
use crate::resources::{DefaultAssets, ImageUrl};

/// Fixed per-lens settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensSettings {
    /// Magnification inside the lens.
    pub zoom: ZoomFactor,
    /// Lens diameter in CSS pixels.
    pub diameter: f64,
}

impl LensSettings {
    /// Lens radius in CSS pixels.
    #[must_use]
    pub fn radius(self) -> f64 {
        self.diameter / 2.0
    }
}

impl Default for LensSettings {
    fn default() -> Self {
        Self {
            zoom: ZoomFactor::default(),
            diameter: mapper::DEFAULT_LENS_DIAMETER,
        }
    }
}

/// Pointer tracking state of one lens.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LensState {
    /// The pointer is not over the pane.
    #[default]
    Hidden,
    /// The pointer is over the pane.
    Tracking {
        /// Latest pointer position.
        sample: PointerSample,
        /// Pane size measured with that sample.
        viewport: Viewport,
    },
}

impl LensState {
    /// Record a pointer move.
    ///
    /// Samples outside the measured pane hide the lens instead of
    /// extrapolating past the image edge.
    pub fn pointer_move(&mut self, sample: PointerSample, viewport: Viewport) {
        *self = if viewport.contains(sample) {
            Self::Tracking { sample, viewport }
        } else {
            Self::Hidden
        };
    }

    /// Record the pointer leaving the pane.
    pub fn pointer_leave(&mut self) {
        *self = Self::Hidden;
    }

    /// The current pointer sample, if tracking.
    #[must_use]
    pub const fn sample(&self) -> Option<PointerSample> {
        match self {
            Self::Hidden => None,
            Self::Tracking { sample, .. } => Some(*sample),
        }
    }

    /// The lens to draw, or `None` when the pointer is elsewhere.
    ///
    /// An empty `image` is replaced by the placeholder from `assets`.
    #[must_use]
    pub fn overlay(
        &self,
        settings: LensSettings,
        image: &ImageUrl,
        assets: &DefaultAssets,
    ) -> Option<LensOverlay> {
        let Self::Tracking { sample, viewport } = *self else {
            return None;
        };
        Some(LensOverlay {
            projection: mapper::project(viewport, sample, settings.zoom, settings.radius()),
            diameter: settings.diameter,
            image: assets.or_placeholder(image),
        })
    }
}

/// A lens ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct LensOverlay {
    /// Placement and background geometry.
    pub projection: LensProjection,
    /// Lens diameter in CSS pixels.
    pub diameter: f64,
    /// Image shown magnified inside the lens.
    pub image: ImageUrl,
}

impl LensOverlay {
    /// Inline CSS for the lens element.
    ///
    /// The lens class supplies the circle, border, shadow and
    /// `pointer-events: none`; this only carries the per-move geometry.
    #[must_use]
    pub fn style(&self) -> String {
        let p = &self.projection;
        let d = self.diameter;
        format!(
            "left: {}px; top: {}px; width: {d}px; height: {d}px; \
             background-image: {}; background-repeat: no-repeat; \
             background-size: {}% {}%; background-position: {}% {}%;",
            p.left,
            p.top,
            self.image.css_url(),
            p.background_size,
            p.background_size,
            p.background_x,
            p.background_y,
        )
    }
}
