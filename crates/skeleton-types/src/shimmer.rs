use crate::length::CssLength;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Direction the shimmer wave travels across a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WaveDirection {
    #[default]
    LeftToRight,
    RightToLeft,
    TopToBottom,
    BottomToTop,
}

/// All directions in display order.
pub const ALL_DIRECTIONS: &[WaveDirection] = &[
    WaveDirection::LeftToRight,
    WaveDirection::RightToLeft,
    WaveDirection::TopToBottom,
    WaveDirection::BottomToTop,
];

impl WaveDirection {
    /// Key used in config files and props.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveDirection::LeftToRight => "left-to-right",
            WaveDirection::RightToLeft => "right-to-left",
            WaveDirection::TopToBottom => "top-to-bottom",
            WaveDirection::BottomToTop => "bottom-to-top",
        }
    }

    /// Short suffix of the matching keyframes name.
    pub fn short(&self) -> &'static str {
        match self {
            WaveDirection::LeftToRight => "ltr",
            WaveDirection::RightToLeft => "rtl",
            WaveDirection::TopToBottom => "ttb",
            WaveDirection::BottomToTop => "btt",
        }
    }

    /// Gradient angle for `linear-gradient`.
    pub fn angle(&self) -> &'static str {
        match self {
            WaveDirection::LeftToRight => "90deg",
            WaveDirection::RightToLeft => "270deg",
            WaveDirection::TopToBottom => "180deg",
            WaveDirection::BottomToTop => "0deg",
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, WaveDirection::LeftToRight | WaveDirection::RightToLeft)
    }
}

impl FromStr for WaveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_DIRECTIONS
            .iter()
            .copied()
            .find(|d| d.as_str() == s || d.short() == s)
            .ok_or_else(|| format!("unknown wave direction: {s}"))
    }
}

/// Visual parameters shared by every block of one skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShimmerConfig {
    pub enabled: bool,
    pub base_color: String,
    pub highlight_color: String,
    /// Optional center band of the wave, drawn on top of the highlight.
    pub shimmer_color: Option<String>,
    pub wave_width: CssLength,
    pub direction: WaveDirection,
    pub speed: f64,
}

impl Default for ShimmerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_color: DEFAULT_BASE_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            shimmer_color: None,
            wave_width: CssLength::Percent(200.0),
            direction: WaveDirection::LeftToRight,
            speed: 1.0,
        }
    }
}

pub const DEFAULT_BASE_COLOR: &str = "#e2e8f0";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#f1f5f9";
