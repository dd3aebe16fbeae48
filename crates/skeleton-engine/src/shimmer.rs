use skeleton_types::{format_number, ShimmerConfig};

/// Seconds per sweep at speed 1.
pub const BASE_DURATION_SECS: f64 = 1.5;

/// Background of a placeholder block.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Flat {
        color: String,
    },
    Shimmer {
        base_color: String,
        gradient: String,
        size: String,
        animation: String,
    },
}

impl Fill {
    /// Compute the fill for one block.
    pub fn from_config(config: &ShimmerConfig) -> Self {
        if !config.enabled {
            return Fill::Flat {
                color: config.base_color.clone(),
            };
        }

        let base = &config.base_color;
        let highlight = &config.highlight_color;
        let stops = match &config.shimmer_color {
            Some(band) => format!(
                "{base} 0%, {highlight} 35%, {band} 50%, {highlight} 65%, {base} 100%"
            ),
            None => format!("{base} 0%, {highlight} 50%, {base} 100%"),
        };
        let direction = config.direction;
        let size = if direction.is_horizontal() {
            format!("{} 100%", config.wave_width)
        } else {
            format!("100% {}", config.wave_width)
        };

        Fill::Shimmer {
            base_color: base.clone(),
            gradient: format!("linear-gradient({}, {stops})", direction.angle()),
            size,
            animation: format!(
                "{} {}s linear infinite",
                animation_name(config),
                format_number(duration_secs(config.speed))
            ),
        }
    }

    /// CSS declarations for this fill.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        match self {
            Fill::Flat { color } => vec![("background-color", color.clone())],
            Fill::Shimmer {
                base_color,
                gradient,
                size,
                animation,
            } => vec![
                ("background-color", base_color.clone()),
                ("background-image", gradient.clone()),
                ("background-size", size.clone()),
                ("animation", animation.clone()),
            ],
        }
    }
}

/// Keyframes name for the configured direction.
pub fn animation_name(config: &ShimmerConfig) -> String {
    format!("auto-skeleton-shimmer-{}", config.direction.short())
}

/// Loop period for a speed multiplier. Unusable speeds count as 1.
pub fn duration_secs(speed: f64) -> f64 {
    let speed = if speed.is_finite() && speed > 0.0 {
        speed
    } else {
        1.0
    };
    BASE_DURATION_SECS / speed
}
