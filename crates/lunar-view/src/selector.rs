//! Stage selector model.
//!
//! A controlled, single-choice selection over [`StageId::ALL`]. Exactly
//! one option is active at a time.

use crate::stage::StageId;

/// One entry of the stage selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageOption {
    /// The stage this option selects.
    pub stage: StageId,
    /// Whether it is the active option.
    pub active: bool,
}

impl StageOption {
    /// The stage to report when this option is clicked.
    ///
    /// `None` for the active option. Nothing is remembered between
    /// clicks: if the host ignores a report, the next click on the same
    /// option reports again.
    #[must_use]
    pub const fn click(self) -> Option<StageId> {
        if self.active { None } else { Some(self.stage) }
    }
}

/// The selector's current choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageSelection {
    active: StageId,
}

impl StageSelection {
    /// Start with `initial` active.
    #[must_use]
    pub const fn new(initial: StageId) -> Self {
        Self { active: initial }
    }

    /// The active stage.
    #[must_use]
    pub const fn active(self) -> StageId {
        self.active
    }

    /// Make `stage` active.
    ///
    /// Returns `Some(stage)` when the selection changed, which is when
    /// the host's change callback fires; re-selecting the active option
    /// returns `None`.
    pub fn select(&mut self, stage: StageId) -> Option<StageId> {
        if self.active == stage {
            return None;
        }
        self.active = stage;
        Some(stage)
    }

    /// All options in display order with their active flag.
    pub fn options(self) -> impl Iterator<Item = StageOption> {
        StageId::ALL.into_iter().map(move |stage| StageOption {
            stage,
            active: stage == self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(selection: StageSelection) -> usize {
        selection.options().filter(|o| o.active).count()
    }

    #[test]
    fn defaults_to_super_resolved() {
        assert_eq!(StageSelection::default().active(), StageId::SuperResolved);
    }

    #[test]
    fn options_are_in_display_order() {
        let stages: Vec<_> = StageSelection::default().options().map(|o| o.stage).collect();
        assert_eq!(stages, StageId::ALL);
    }

    #[test]
    fn exactly_one_option_active_through_any_selection_sequence() {
        let mut selection = StageSelection::new(StageId::Baseline);
        assert_eq!(active_count(selection), 1);
        for stage in StageId::ALL.into_iter().chain(StageId::ALL.into_iter().rev()) {
            selection.select(stage);
            assert_eq!(active_count(selection), 1);
            assert_eq!(selection.active(), stage);
        }
    }

    #[test]
    fn select_reports_change_only_when_different() {
        let mut selection = StageSelection::new(StageId::SuperResolved);
        assert_eq!(selection.select(StageId::SuperResolved), None);
        assert_eq!(
            selection.select(StageId::ContrastEnhanced),
            Some(StageId::ContrastEnhanced)
        );
        assert_eq!(selection.active(), StageId::ContrastEnhanced);
    }

    #[test]
    fn clicking_inactive_option_reports_every_time_until_host_updates() {
        let selection = StageSelection::new(StageId::SuperResolved);
        let clahe = || {
            selection
                .options()
                .find(|o| o.stage == StageId::ContrastEnhanced)
                .and_then(StageOption::click)
        };
        // Host ignored the first report; the second click reports again.
        assert_eq!(clahe(), Some(StageId::ContrastEnhanced));
        assert_eq!(clahe(), Some(StageId::ContrastEnhanced));
    }

    #[test]
    fn clicking_active_option_reports_nothing() {
        for stage in StageId::ALL {
            let selection = StageSelection::new(stage);
            let reported: Vec<_> = selection.options().filter_map(StageOption::click).collect();
            assert_eq!(reported.len(), 3);
            assert!(!reported.contains(&stage));
        }
    }
}
