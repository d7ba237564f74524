//! Image resources per stage and their fallback resolution.
//!
//! The host owns a [`StageImageMap`] that may be partially populated.
//! [`resolve`] turns it into a concrete [`ImageUrl`] for any stage by
//! falling back to the configured [`DefaultAssets`], and finally to the
//! placeholder, so a pane never points at a broken reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stage::StageId;

/// Path of the placeholder image served with the app.
pub const PLACEHOLDER_URL: &str = "/placeholder.svg";

/// A displayable image: a served path or a `blob:` object URL.
///
/// An empty URL means "unset" everywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Wrap a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the URL is empty (unset).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// `Some(self)` unless the URL is empty.
    #[must_use]
    pub fn non_empty(&self) -> Option<&Self> {
        (!self.is_empty()).then_some(self)
    }

    /// Whether this is a `blob:` object URL owned by the page.
    #[must_use]
    pub fn is_blob(&self) -> bool {
        self.0.starts_with("blob:")
    }

    /// The URL quoted for a CSS `url(...)` value.
    #[must_use]
    pub fn css_url(&self) -> String {
        let escaped = self.0.replace('\\', "\\\\").replace('"', "\\\"");
        format!("url(\"{escaped}\")")
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

/// Host-owned mapping from stage to an optional image.
///
/// Keys are always the four stages; `None` (or an empty URL) means "use
/// the default for that stage".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StageImageMap {
    entries: [Option<ImageUrl>; 4],
}

impl StageImageMap {
    /// An empty mapping: every stage resolves to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, stage: StageId, url: impl Into<ImageUrl>) -> Self {
        self.set(stage, url);
        self
    }

    /// The image set for `stage`, if any non-empty one is set.
    #[must_use]
    pub fn get(&self, stage: StageId) -> Option<&ImageUrl> {
        self.entries[stage.index()]
            .as_ref()
            .and_then(ImageUrl::non_empty)
    }

    /// Set the image for `stage`.
    pub fn set(&mut self, stage: StageId, url: impl Into<ImageUrl>) {
        self.entries[stage.index()] = Some(url.into());
    }

    /// Unset every stage.
    pub fn clear(&mut self) {
        self.entries = Default::default();
    }

    /// Set `url` on every stage that has no image yet.
    pub fn fill_unset(&mut self, url: &ImageUrl) {
        for stage in StageId::ALL {
            if self.get(stage).is_none() {
                self.set(stage, url.clone());
            }
        }
    }

    /// The most processed stage that has an image:
    /// super-resolved, then AI, then contrast-enhanced, then baseline.
    #[must_use]
    pub fn best_available(&self) -> Option<&ImageUrl> {
        StageId::ALL
            .into_iter()
            .rev()
            .find_map(|stage| self.get(stage))
    }

    /// Iterate `(stage, image)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StageId, Option<&ImageUrl>)> + '_ {
        StageId::ALL.into_iter().map(|stage| (stage, self.get(stage)))
    }
}

/// Default image per stage, plus the last-resort placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DefaultAssets {
    /// Default for [`StageId::Baseline`].
    pub raw: ImageUrl,
    /// Default for [`StageId::ContrastEnhanced`].
    pub clahe: ImageUrl,
    /// Default for [`StageId::AiReconstructed`].
    pub ai: ImageUrl,
    /// Default for [`StageId::SuperResolved`].
    pub sr: ImageUrl,
    /// Used when neither the mapping nor the stage default has an image.
    pub placeholder: ImageUrl,
}

impl Default for DefaultAssets {
    fn default() -> Self {
        Self {
            raw: ImageUrl::new("/raw.png"),
            clahe: ImageUrl::new("/clahe.png"),
            ai: ImageUrl::new("/final_recon.png"),
            sr: ImageUrl::new("/super-resolution-lunar-surface.jpg"),
            placeholder: ImageUrl::new(PLACEHOLDER_URL),
        }
    }
}

impl DefaultAssets {
    /// The configured default for `stage`.
    #[must_use]
    pub const fn for_stage(&self, stage: StageId) -> &ImageUrl {
        match stage {
            StageId::Baseline => &self.raw,
            StageId::ContrastEnhanced => &self.clahe,
            StageId::AiReconstructed => &self.ai,
            StageId::SuperResolved => &self.sr,
        }
    }

    /// The placeholder, or [`PLACEHOLDER_URL`] if that too is empty.
    #[must_use]
    pub fn placeholder(&self) -> ImageUrl {
        self.placeholder
            .non_empty()
            .cloned()
            .unwrap_or_else(|| ImageUrl::new(PLACEHOLDER_URL))
    }

    /// `url` unless it is empty, in which case the placeholder.
    #[must_use]
    pub fn or_placeholder(&self, url: &ImageUrl) -> ImageUrl {
        url.non_empty().cloned().unwrap_or_else(|| {
            tracing::debug!("empty image resource, using placeholder");
            self.placeholder()
        })
    }
}

/// Resolve the image shown for `stage`.
///
/// `images[stage] ?? defaults[stage] ?? placeholder`. Never fails.
#[must_use]
pub fn resolve(images: &StageImageMap, defaults: &DefaultAssets, stage: StageId) -> ImageUrl {
    images
        .get(stage)
        .or_else(|| defaults.for_stage(stage).non_empty())
        .cloned()
        .unwrap_or_else(|| {
            tracing::debug!(stage = stage.key(), "no image for stage, using placeholder");
            defaults.placeholder()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_resolves_to_defaults() {
        let images = StageImageMap::new();
        let defaults = DefaultAssets::default();
        for stage in StageId::ALL {
            assert_eq!(
                resolve(&images, &defaults, stage),
                *defaults.for_stage(stage),
                "stage {stage}"
            );
        }
    }

    #[test]
    fn set_entry_wins_over_default() {
        let images = StageImageMap::new().with(StageId::AiReconstructed, "blob:abc");
        let defaults = DefaultAssets::default();
        assert_eq!(
            resolve(&images, &defaults, StageId::AiReconstructed).as_str(),
            "blob:abc"
        );
        assert_eq!(
            resolve(&images, &defaults, StageId::SuperResolved),
            defaults.sr
        );
    }

    #[test]
    fn empty_entry_counts_as_unset() {
        let images = StageImageMap::new().with(StageId::Baseline, "  ");
        let defaults = DefaultAssets::default();
        assert_eq!(images.get(StageId::Baseline), None);
        assert_eq!(resolve(&images, &defaults, StageId::Baseline), defaults.raw);
    }

    #[test]
    fn empty_default_falls_back_to_placeholder() {
        let images = StageImageMap::new();
        let defaults = DefaultAssets {
            clahe: ImageUrl::default(),
            ..DefaultAssets::default()
        };
        assert_eq!(
            resolve(&images, &defaults, StageId::ContrastEnhanced).as_str(),
            PLACEHOLDER_URL
        );

        let no_placeholder = DefaultAssets {
            sr: ImageUrl::default(),
            placeholder: ImageUrl::default(),
            ..DefaultAssets::default()
        };
        assert_eq!(
            resolve(&images, &no_placeholder, StageId::SuperResolved).as_str(),
            PLACEHOLDER_URL
        );
    }

    #[test]
    fn fill_unset_keeps_existing_entries() {
        let mut images = StageImageMap::new().with(StageId::ContrastEnhanced, "/mine.png");
        images.fill_unset(&ImageUrl::new("blob:up"));
        let urls: Vec<_> = images
            .iter()
            .map(|(_, url)| url.map(ImageUrl::as_str))
            .collect();
        assert_eq!(
            urls,
            [Some("blob:up"), Some("/mine.png"), Some("blob:up"), Some("blob:up")]
        );
    }

    #[test]
    fn best_available_prefers_most_processed() {
        assert_eq!(StageImageMap::new().best_available(), None);

        let images = StageImageMap::new()
            .with(StageId::Baseline, "raw")
            .with(StageId::ContrastEnhanced, "clahe");
        assert_eq!(images.best_available().map(ImageUrl::as_str), Some("clahe"));

        let images = images.with(StageId::SuperResolved, "sr");
        assert_eq!(images.best_available().map(ImageUrl::as_str), Some("sr"));
    }

    #[test]
    fn clear_unsets_everything() {
        let mut images = StageImageMap::new().with(StageId::Baseline, "raw");
        images.clear();
        assert_eq!(images, StageImageMap::new());
    }

    #[test]
    fn css_url_escapes_quotes() {
        assert_eq!(ImageUrl::new("/a.png").css_url(), "url(\"/a.png\")");
        assert_eq!(ImageUrl::new("/a\"b.png").css_url(), "url(\"/a\\\"b.png\")");
    }

    #[test]
    fn blob_detection() {
        assert!(ImageUrl::new("blob:http://localhost/1234").is_blob());
        assert!(!ImageUrl::new("/raw.png").is_blob());
    }
}
