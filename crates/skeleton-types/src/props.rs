use crate::config::LoaderDefaults;
use crate::length::CssLength;
use crate::shimmer::WaveDirection;
use crate::style::StyleOverrides;

/// Per-instance settings as supplied by a caller.
///
/// `None` means "not given" and never replaces a default; `Some` always wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoSkeletonOptions {
    pub inherit_styles: Option<bool>,
    pub shimmer: Option<bool>,
    pub color: Option<String>,
    pub highlight_color: Option<String>,
    pub shimmer_color: Option<String>,
    pub wave_width: Option<CssLength>,
    pub wave_direction: Option<WaveDirection>,
    pub speed: Option<f64>,
    pub aria_label: Option<String>,
    /// Layered per tag over the defaults' override map.
    pub styles: StyleOverrides,
}

impl AutoSkeletonOptions {
    /// Merge these options over library defaults.
    pub fn resolve(self, defaults: &LoaderDefaults) -> LoaderDefaults {
        let mut styles = defaults.styles.clone();
        for (tag, fragment) in self.styles {
            styles
                .entry(tag)
                .and_modify(|existing| existing.overlay(&fragment))
                .or_insert(fragment);
        }

        LoaderDefaults {
            inherit_styles: merge(self.inherit_styles, &defaults.inherit_styles),
            shimmer: merge(self.shimmer, &defaults.shimmer),
            color: merge(self.color, &defaults.color),
            highlight_color: merge(self.highlight_color, &defaults.highlight_color),
            shimmer_color: self.shimmer_color.or_else(|| defaults.shimmer_color.clone()),
            wave_width: merge(self.wave_width, &defaults.wave_width),
            wave_direction: merge(self.wave_direction, &defaults.wave_direction),
            speed: merge(self.speed, &defaults.speed),
            aria_label: merge(self.aria_label, &defaults.aria_label),
            styles,
        }
    }
}

/// A supplied value wins; an absent one falls back to the default.
pub fn merge<T: Clone>(user: Option<T>, default: &T) -> T {
    user.unwrap_or_else(|| default.clone())
}

/// Join class names with single spaces, skipping absent and blank entries.
pub fn class_names<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    values
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
