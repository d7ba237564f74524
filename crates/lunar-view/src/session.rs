//! Host-side session state: uploaded images, selection, and the
//! simulated pipeline run.
//!
//! No image is actually processed. An upload becomes the baseline image
//! immediately; when the simulated run completes, the same image is
//! substituted for every stage that has none and the view jumps to the
//! super-resolved stage.
//!
//! Each upload starts a new generation. A completion carrying an older
//! generation is stale (a newer upload replaced it) and is ignored.

use crate::resources::{DefaultAssets, ImageUrl, StageImageMap};
use crate::selector::StageSelection;
use crate::stage::StageId;
use crate::viewer::ViewerState;

/// Returned by [`Session::begin_upload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTicket {
    /// Generation of the run started by this upload.
    pub generation: u64,
    /// The previous upload's blob URL, now referenced by no stage.
    ///
    /// The caller should revoke it.
    pub retired: Option<ImageUrl>,
}

/// State owned by the host page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    images: StageImageMap,
    selection: StageSelection,
    processing: bool,
    generation: u64,
    upload: Option<ImageUrl>,
}

impl Session {
    /// A fresh session showing stage defaults with `initial` selected.
    #[must_use]
    pub fn new(initial: StageId) -> Self {
        Self {
            selection: StageSelection::new(initial),
            ..Self::default()
        }
    }

    /// Current stage → image mapping.
    #[must_use]
    pub const fn images(&self) -> &StageImageMap {
        &self.images
    }

    /// Stage shown in the selected pane.
    #[must_use]
    pub const fn selected(&self) -> StageId {
        self.selection.active()
    }

    /// Whether a simulated run is in flight.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Generation of the most recent upload.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// The state passed down to the viewer.
    #[must_use]
    pub const fn viewer_state(&self) -> ViewerState {
        ViewerState {
            selected: self.selection.active(),
            processing: self.processing,
        }
    }

    /// Select a stage. Returns `true` if the selection changed.
    pub fn select(&mut self, stage: StageId) -> bool {
        self.selection.select(stage).is_some()
    }

    /// Start a simulated run for a freshly uploaded image.
    ///
    /// The mapping is reset to `{baseline: url}`, so stages filled by a
    /// previous upload do not linger; the previous upload is handed back
    /// for revocation.
    pub fn begin_upload(&mut self, url: ImageUrl) -> UploadTicket {
        self.generation += 1;
        let retired = self.upload.replace(url.clone()).filter(|old| *old != url);

        self.images.clear();
        self.images.set(StageId::Baseline, url);
        self.processing = true;

        tracing::info!(generation = self.generation, "simulated run started");
        UploadTicket {
            generation: self.generation,
            retired,
        }
    }

    /// Finish the simulated run started with `generation`.
    ///
    /// Returns `false` (and changes nothing) if a newer upload has
    /// superseded it.
    pub fn complete_run(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.processing {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping stale simulated run"
            );
            return false;
        }
        if let Some(url) = self.upload.clone() {
            self.images.fill_unset(&url);
        }
        self.processing = false;
        self.selection.select(StageId::SuperResolved);
        tracing::info!(generation, "simulated run finished");
        true
    }

    /// The image offered for download: the most processed stage with an
    /// image, else the super-resolved default.
    ///
    /// Returns `None` only if that default is empty too.
    #[must_use]
    pub fn final_image(&self, defaults: &DefaultAssets) -> Option<ImageUrl> {
        self.images
            .best_available()
            .or_else(|| defaults.for_stage(StageId::SuperResolved).non_empty())
            .cloned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::resources;

    fn url(s: &str) -> ImageUrl {
        ImageUrl::new(s)
    }

    #[test]
    fn fresh_session_shows_defaults() {
        let session = Session::new(StageId::SuperResolved);
        let defaults = DefaultAssets::default();
        assert!(!session.is_processing());
        assert_eq!(session.images().best_available(), None);
        assert_eq!(session.final_image(&defaults), Some(defaults.sr.clone()));
        assert_eq!(
            resources::resolve(session.images(), &defaults, StageId::Baseline),
            defaults.raw
        );
    }

    #[test]
    fn upload_sets_baseline_and_starts_processing() {
        let mut session = Session::new(StageId::ContrastEnhanced);
        let ticket = session.begin_upload(url("blob:1"));
        assert_eq!(ticket.generation, 1);
        assert_eq!(ticket.retired, None);
        assert!(session.is_processing());
        assert_eq!(session.images().get(StageId::Baseline), Some(&url("blob:1")));
        assert_eq!(session.images().get(StageId::SuperResolved), None);
        assert_eq!(session.selected(), StageId::ContrastEnhanced);
    }

    #[test]
    fn completed_run_substitutes_upload_for_every_stage() {
        let mut session = Session::new(StageId::Baseline);
        let ticket = session.begin_upload(url("blob:1"));
        assert!(session.complete_run(ticket.generation));
        assert!(!session.is_processing());
        assert_eq!(session.selected(), StageId::SuperResolved);
        for stage in StageId::ALL {
            assert_eq!(session.images().get(stage), Some(&url("blob:1")), "{stage}");
        }
        assert_eq!(session.final_image(&DefaultAssets::default()), Some(url("blob:1")));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut session = Session::new(StageId::Baseline);
        let first = session.begin_upload(url("blob:1"));
        let second = session.begin_upload(url("blob:2"));
        assert_eq!(second.retired, Some(url("blob:1")));

        assert!(!session.complete_run(first.generation));
        assert!(session.is_processing());
        assert_eq!(session.images().get(StageId::SuperResolved), None);

        assert!(session.complete_run(second.generation));
        assert_eq!(session.images().get(StageId::SuperResolved), Some(&url("blob:2")));
    }

    #[test]
    fn second_upload_replaces_every_stage() {
        let mut session = Session::new(StageId::SuperResolved);
        let first = session.begin_upload(url("blob:1"));
        session.complete_run(first.generation);

        let second = session.begin_upload(url("blob:2"));
        assert_eq!(second.retired, Some(url("blob:1")));
        session.complete_run(second.generation);
        for stage in StageId::ALL {
            assert_eq!(session.images().get(stage), Some(&url("blob:2")), "{stage}");
        }
    }

    #[test]
    fn completing_twice_is_a_no_op() {
        let mut session = Session::new(StageId::SuperResolved);
        let ticket = session.begin_upload(url("blob:1"));
        assert!(session.complete_run(ticket.generation));
        session.select(StageId::AiReconstructed);
        assert!(!session.complete_run(ticket.generation));
        assert_eq!(session.selected(), StageId::AiReconstructed);
    }

    #[test]
    fn viewer_state_mirrors_session() {
        let mut session = Session::new(StageId::SuperResolved);
        assert!(session.select(StageId::AiReconstructed));
        assert!(!session.select(StageId::AiReconstructed));
        session.begin_upload(url("blob:1"));
        assert_eq!(
            session.viewer_state(),
            ViewerState {
                selected: StageId::AiReconstructed,
                processing: true,
            }
        );
    }

    #[test]
    fn empty_default_and_no_upload_disables_download() {
        let defaults = DefaultAssets {
            sr: ImageUrl::default(),
            ..DefaultAssets::default()
        };
        assert_eq!(Session::new(StageId::Baseline).final_image(&defaults), None);
    }
}
