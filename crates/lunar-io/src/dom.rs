//! Pane measurement for pointer tracking.

use lunar_view::{PointerSample, Viewport};

/// Where a pane sits on screen and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneMetrics {
    /// Left edge of the bounding rectangle, in client coordinates.
    pub left: f64,
    /// Top edge of the bounding rectangle, in client coordinates.
    pub top: f64,
    /// Client size of the pane.
    pub viewport: Viewport,
}

impl PaneMetrics {
    /// Convert client coordinates into a pane-local sample.
    #[must_use]
    pub fn sample_at(&self, client_x: f64, client_y: f64) -> PointerSample {
        PointerSample::new(client_x - self.left, client_y - self.top)
    }
}

/// Measure the element with the given DOM id.
///
/// Returns `None` outside a browser or when the element is not mounted.
#[must_use]
pub fn measure(id: &str) -> Option<PaneMetrics> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(PaneMetrics {
        left: rect.left(),
        top: rect.top(),
        viewport: Viewport::new(
            f64::from(element.client_width()),
            f64::from(element.client_height()),
        ),
    })
}
