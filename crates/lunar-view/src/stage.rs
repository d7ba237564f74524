//! Restoration stage identifiers and display metadata.
//!
//! Each [`StageId`] names one step of the restoration pipeline. The set
//! is closed and ordered: the order of [`StageId::ALL`] is the order in
//! which the stage selector lists them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for a restoration pipeline stage.
///
/// The default is [`StageId::SuperResolved`]: the best available result
/// is shown first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageId {
    /// Unprocessed input as uploaded.
    #[serde(rename = "raw")]
    Baseline,
    /// Contrast-limited adaptive histogram equalization.
    #[serde(rename = "clahe")]
    ContrastEnhanced,
    /// Diffusion-based terrain reconstruction.
    #[serde(rename = "ai")]
    AiReconstructed,
    /// Transformer super-resolution, the final output.
    #[default]
    #[serde(rename = "sr")]
    SuperResolved,
}

impl StageId {
    /// All stages in display order.
    pub const ALL: [Self; 4] = [
        Self::Baseline,
        Self::ContrastEnhanced,
        Self::AiReconstructed,
        Self::SuperResolved,
    ];

    /// Position of the stage in [`StageId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Baseline => 0,
            Self::ContrastEnhanced => 1,
            Self::AiReconstructed => 2,
            Self::SuperResolved => 3,
        }
    }

    /// Short machine key, also used in configuration files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Baseline => "raw",
            Self::ContrastEnhanced => "clahe",
            Self::AiReconstructed => "ai",
            Self::SuperResolved => "sr",
        }
    }

    /// Tab label shown in the stage selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "RAW",
            Self::ContrastEnhanced => "CLAHE",
            Self::AiReconstructed => "AI Recon",
            Self::SuperResolved => "Super-Res",
        }
    }

    /// Upper-case code used in pane headings ("SR Processed").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Baseline => "RAW",
            Self::ContrastEnhanced => "CLAHE",
            Self::AiReconstructed => "AI",
            Self::SuperResolved => "SR",
        }
    }

    /// Parse a stage key, treating anything unrecognized as
    /// [`StageId::Baseline`].
    #[must_use]
    pub fn from_key_lossy(key: &str) -> Self {
        key.parse().unwrap_or_else(|_: UnknownStage| {
            tracing::debug!(key, "unknown stage key, using baseline");
            Self::Baseline
        })
    }
}

/// A stage key that names none of the four stages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage key: {0:?}")]
pub struct UnknownStage(pub String);

impl FromStr for StageId {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStage(s.to_owned()))
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant_in_order() {
        assert_eq!(StageId::ALL.len(), 4, "StageId::ALL must list every variant");
        for (i, stage) in StageId::ALL.into_iter().enumerate() {
            assert_eq!(stage.index(), i, "StageId::{stage:?} index out of order");
        }
    }

    #[test]
    fn keys_round_trip_through_from_str() {
        for stage in StageId::ALL {
            assert_eq!(stage.key().parse::<StageId>().unwrap(), stage);
        }
        assert_eq!(" SR ".parse::<StageId>().unwrap(), StageId::SuperResolved);
    }

    #[test]
    fn unknown_key_falls_back_to_baseline() {
        assert!("sharpened".parse::<StageId>().is_err());
        assert_eq!(StageId::from_key_lossy("sharpened"), StageId::Baseline);
        assert_eq!(StageId::from_key_lossy(""), StageId::Baseline);
        assert_eq!(StageId::from_key_lossy("ai"), StageId::AiReconstructed);
    }

    #[test]
    fn default_is_super_resolved() {
        assert_eq!(StageId::default(), StageId::SuperResolved);
    }

    #[test]
    fn serde_uses_short_keys() {
        let json = serde_json::to_string(&StageId::ContrastEnhanced).unwrap();
        assert_eq!(json, "\"clahe\"");
        let back: StageId = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(back, StageId::AiReconstructed);
    }
}
