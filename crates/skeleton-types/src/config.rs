use crate::length::CssLength;
use crate::shimmer::{ShimmerConfig, WaveDirection, DEFAULT_BASE_COLOR, DEFAULT_HIGHLIGHT_COLOR};
use crate::style::StyleOverrides;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ARIA_LABEL: &str = "Loading content...";

/// Library-wide defaults for `AutoSkeleton`.
///
/// Loaded from the `[auto_skeleton]` table of `loading.toml` and provided to
/// a component subtree as an immutable value. Every field falls back to its
/// default so a missing or partial table is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderDefaults {
    pub inherit_styles: bool,
    pub shimmer: bool,
    pub color: String,
    pub highlight_color: String,
    pub shimmer_color: Option<String>,
    pub wave_width: CssLength,
    pub wave_direction: WaveDirection,
    pub speed: f64,
    pub aria_label: String,
    pub styles: StyleOverrides,
}

impl Default for LoaderDefaults {
    fn default() -> Self {
        Self {
            inherit_styles: false,
            shimmer: true,
            color: DEFAULT_BASE_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            shimmer_color: None,
            wave_width: CssLength::Percent(200.0),
            wave_direction: WaveDirection::LeftToRight,
            speed: 1.0,
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            styles: StyleOverrides::new(),
        }
    }
}

impl LoaderDefaults {
    /// Shimmer parameters described by these settings.
    pub fn shimmer_config(&self) -> ShimmerConfig {
        ShimmerConfig {
            enabled: self.shimmer,
            base_color: self.color.clone(),
            highlight_color: self.highlight_color.clone(),
            shimmer_color: self.shimmer_color.clone(),
            wave_width: self.wave_width.clone(),
            direction: self.wave_direction,
            speed: self.speed,
        }
    }
}

/// Top-level structure of `loading.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub auto_skeleton: LoaderDefaults,
}
