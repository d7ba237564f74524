//! Viewer configuration.
//!
//! [`ViewerConfig`] carries everything the app would otherwise hard-code:
//! per-stage default images, lens geometry, the initial stage, and the
//! simulated run delay. It is deserialized from JSON with kebab-case keys;
//! every field has a default, so an empty object `{}` is a valid config.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lens::LensSettings;
use crate::mapper::{self, ZoomFactor};
use crate::resources::DefaultAssets;
use crate::stage::StageId;

/// Errors from loading or validating a [`ViewerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Zoom must be finite and at least 1.
    #[error("zoom must be a finite number >= 1, got {0}")]
    InvalidZoom(f64),

    /// Lens diameter must be finite and positive.
    #[error("lens diameter must be a finite number > 0, got {0}")]
    InvalidLensDiameter(f64),

    /// The download filename must not be empty.
    #[error("download filename must not be empty")]
    EmptyDownloadFilename,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ViewerConfig {
    /// Default image per stage and the placeholder.
    pub assets: DefaultAssets,

    /// Lens magnification.
    pub zoom: ZoomFactor,

    /// Lens diameter in CSS pixels.
    pub lens_diameter: f64,

    /// Stage selected on first load. Unknown keys select the baseline.
    #[serde(deserialize_with = "deserialize_stage_lossy")]
    pub initial_stage: StageId,

    /// Whether panes host a magnifier lens.
    pub show_magnifier: bool,

    /// How long the simulated pipeline run takes, in milliseconds.
    pub simulated_delay_ms: u32,

    /// Filename offered when downloading the reconstructed image.
    pub download_filename: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            assets: DefaultAssets::default(),
            zoom: ZoomFactor::default(),
            lens_diameter: mapper::DEFAULT_LENS_DIAMETER,
            initial_stage: StageId::SuperResolved,
            show_magnifier: true,
            simulated_delay_ms: 1800,
            download_filename: "lunar-unveiled-superres.jpg".to_owned(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or an out-of-range
    /// zoom, and the other [`ConfigError`] variants for invalid values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.lens_diameter.is_finite() && self.lens_diameter > 0.0) {
            return Err(ConfigError::InvalidLensDiameter(self.lens_diameter));
        }
        if self.download_filename.trim().is_empty() {
            return Err(ConfigError::EmptyDownloadFilename);
        }
        Ok(())
    }

    /// Lens settings shared by both panes.
    #[must_use]
    pub const fn lens(&self) -> LensSettings {
        LensSettings {
            zoom: self.zoom,
            diameter: self.lens_diameter,
        }
    }
}

fn deserialize_stage_lossy<'de, D>(deserializer: D) -> Result<StageId, D::Error>
where
    D: Deserializer<'de>,
{
    let key = String::deserialize(deserializer)?;
    Ok(StageId::from_key_lossy(&key))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(ViewerConfig::from_json("{}").unwrap(), ViewerConfig::default());
    }

    #[test]
    fn default_validates() {
        assert!(ViewerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_override() {
        let config = ViewerConfig::from_json(
            r#"{ "zoom": 3.5, "initial-stage": "clahe", "assets": { "sr": "/sr.webp" } }"#,
        )
        .unwrap();
        assert_eq!(config.zoom.get(), 3.5);
        assert_eq!(config.initial_stage, StageId::ContrastEnhanced);
        assert_eq!(config.assets.sr.as_str(), "/sr.webp");
        assert_eq!(config.assets.raw, DefaultAssets::default().raw);
        assert_eq!(config.lens().radius(), 64.0);
    }

    #[test]
    fn unknown_initial_stage_selects_baseline() {
        let config = ViewerConfig::from_json(r#"{ "initial-stage": "denoised" }"#).unwrap();
        assert_eq!(config.initial_stage, StageId::Baseline);
    }

    #[test]
    fn zoom_below_one_is_rejected() {
        let err = ViewerConfig::from_json(r#"{ "zoom": 0.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)), "got {err:?}");
        assert!(err.to_string().contains("zoom"), "got {err}");
    }

    #[test]
    fn bad_diameter_is_rejected() {
        let err = ViewerConfig::from_json(r#"{ "lens-diameter": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLensDiameter(_)), "got {err:?}");
    }

    #[test]
    fn blank_filename_is_rejected() {
        let err = ViewerConfig::from_json(r#"{ "download-filename": " " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyDownloadFilename));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            ViewerConfig::from_json("{ zoom"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn serializes_with_kebab_case_keys() {
        let json = serde_json::to_value(ViewerConfig::default()).unwrap();
        assert_eq!(json["initial-stage"], "sr");
        assert_eq!(json["simulated-delay-ms"], 1800);
        assert_eq!(json["zoom"], 2.0);
        assert_eq!(json["assets"]["placeholder"], "/placeholder.svg");
    }
}
