//! Size heuristics for leaf elements.
//!
//! The numbers are design defaults. What matters is their ordering: larger
//! headings are taller, longer text is wider, and every branch produces a
//! complete geometry.

use skeleton_types::{Attributes, CssLength, StyleFragment, TargetNode};

/// Heading heights in `em`, `h1` first.
const HEADING_SCALE: [f64; 6] = [2.0, 1.75, 1.5, 1.25, 1.1, 1.0];
/// Height of one line of text, in `em`.
const LINE_HEIGHT_EM: f64 = 1.3;
/// Characters that fill a full-width line.
const CHARS_PER_LINE: f64 = 50.0;
const MIN_TEXT_WIDTH_PCT: f64 = 30.0;
const MAX_TEXT_WIDTH_PCT: f64 = 100.0;

const MEDIA_SIZE_PX: f64 = 100.0;
const MEDIA_RADIUS_PX: f64 = 8.0;

const BUTTON_CHAR_PX: f64 = 8.0;
const BUTTON_PADDING_PX: f64 = 32.0;
const BUTTON_MIN_WIDTH_PX: f64 = 64.0;
const CONTROL_HEIGHT_PX: f64 = 36.0;
const CONTROL_RADIUS_PX: f64 = 6.0;
const TEXTAREA_HEIGHT_PX: f64 = 80.0;

const DEFAULT_RADIUS_PX: f64 = 4.0;

const TEXT_TAGS: &[&str] = &[
    "p", "span", "label", "small", "strong", "em", "b", "i", "a", "li", "td", "th", "blockquote",
    "code", "caption", "figcaption",
];
const MEDIA_TAGS: &[&str] = &["img", "svg", "video", "canvas", "picture", "iframe"];

/// Width, height and corner radius of a placeholder block.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatedGeometry {
    pub width: CssLength,
    pub height: CssLength,
    pub corner_radius: CssLength,
}

impl EstimatedGeometry {
    fn new(width: CssLength, height: CssLength, corner_radius: CssLength) -> Self {
        Self {
            width,
            height,
            corner_radius,
        }
    }

    /// Full width, one text line, small radius.
    pub fn generic() -> Self {
        Self::new(
            CssLength::Percent(100.0),
            CssLength::Em(LINE_HEIGHT_EM),
            CssLength::Px(DEFAULT_RADIUS_PX),
        )
    }

    /// Replace any dimension that `style` specifies.
    pub fn overlay(&mut self, style: &StyleFragment) {
        if let Some(width) = &style.width {
            self.width = width.clone();
        }
        if let Some(height) = &style.height {
            self.height = height.clone();
        }
        if let Some(radius) = &style.border_radius {
            self.corner_radius = radius.clone();
        }
    }
}

/// Heuristic category of a leaf tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagClass {
    Heading(usize),
    Text,
    Media,
    Button,
    Input,
    TextArea,
    Other,
}

impl TagClass {
    fn of(tag: &str) -> Self {
        let tag = tag.to_ascii_lowercase();
        if let Some(level) = heading_level(&tag) {
            return TagClass::Heading(level);
        }
        match tag.as_str() {
            "button" => TagClass::Button,
            "input" | "select" => TagClass::Input,
            "textarea" => TagClass::TextArea,
            t if TEXT_TAGS.contains(&t) => TagClass::Text,
            t if MEDIA_TAGS.contains(&t) => TagClass::Media,
            _ => TagClass::Other,
        }
    }
}

fn heading_level(tag: &str) -> Option<usize> {
    let level = tag.strip_prefix('h')?.parse::<usize>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Estimate the geometry of a leaf element.
pub fn estimate(tag: &str, attributes: &Attributes, children: &[TargetNode]) -> EstimatedGeometry {
    match TagClass::of(tag) {
        TagClass::Heading(level) => EstimatedGeometry::new(
            CssLength::Percent(100.0),
            CssLength::Em(HEADING_SCALE[level - 1]),
            CssLength::Px(DEFAULT_RADIUS_PX),
        ),
        TagClass::Text => EstimatedGeometry::new(
            CssLength::Percent(text_width_percent(char_count(children))),
            CssLength::Em(LINE_HEIGHT_EM),
            CssLength::Px(DEFAULT_RADIUS_PX),
        ),
        TagClass::Media => {
            let style = StyleFragment::from_attributes(attributes);
            EstimatedGeometry::new(
                attribute_length(attributes, "width").unwrap_or(CssLength::Px(MEDIA_SIZE_PX)),
                attribute_length(attributes, "height").unwrap_or(CssLength::Px(MEDIA_SIZE_PX)),
                style
                    .border_radius
                    .unwrap_or(CssLength::Px(MEDIA_RADIUS_PX)),
            )
        }
        TagClass::Button => {
            let chars = char_count(children) as f64;
            let width = (chars * BUTTON_CHAR_PX + BUTTON_PADDING_PX).max(BUTTON_MIN_WIDTH_PX);
            EstimatedGeometry::new(
                CssLength::Px(width),
                CssLength::Px(CONTROL_HEIGHT_PX),
                CssLength::Px(CONTROL_RADIUS_PX),
            )
        }
        TagClass::Input => EstimatedGeometry::new(
            CssLength::Percent(100.0),
            CssLength::Px(CONTROL_HEIGHT_PX),
            CssLength::Px(CONTROL_RADIUS_PX),
        ),
        TagClass::TextArea => EstimatedGeometry::new(
            CssLength::Percent(100.0),
            CssLength::Px(TEXTAREA_HEIGHT_PX),
            CssLength::Px(CONTROL_RADIUS_PX),
        ),
        TagClass::Other => {
            let mut geometry = EstimatedGeometry::generic();
            geometry.overlay(&StyleFragment::from_attributes(attributes));
            geometry
        }
    }
}

/// Width in percent for a run of text, clamped to `[30, 100]`.
pub fn text_width_percent(chars: usize) -> f64 {
    (chars as f64 * 100.0 / CHARS_PER_LINE).clamp(MIN_TEXT_WIDTH_PCT, MAX_TEXT_WIDTH_PCT)
}

/// Whether a tag renders inline in its parent's text flow.
pub fn is_inline_tag(tag: &str) -> bool {
    matches!(
        tag.to_ascii_lowercase().as_str(),
        "span" | "a" | "strong" | "em" | "b" | "i" | "small" | "label" | "code" | "button"
            | "img" | "svg" | "input" | "select"
    )
}

fn char_count(children: &[TargetNode]) -> usize {
    children
        .iter()
        .map(|c| c.text_content())
        .collect::<String>()
        .trim()
        .chars()
        .count()
}

fn attribute_length(attributes: &Attributes, name: &str) -> Option<CssLength> {
    attributes.get(name).and_then(CssLength::from_value)
}
