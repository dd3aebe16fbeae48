use crate::length::{format_number, CssLength, IntoCssLength};
use crate::node::Attributes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Per-tag style overrides, keyed by the original node's tag name.
pub type StyleOverrides = BTreeMap<String, StyleFragment>;

/// Properties that take bare numbers. Everything else gets a `px` suffix.
const UNITLESS: &[&str] = &[
    "opacity",
    "z-index",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
    "line-height",
    "font-weight",
];

/// A parsed inline style.
///
/// Geometry the skeleton cares about is typed; every other declaration is
/// kept verbatim (kebab-case property names) so layout properties such as
/// `display` or `gap` survive on re-emitted containers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct StyleFragment {
    pub width: Option<CssLength>,
    pub height: Option<CssLength>,
    pub border_radius: Option<CssLength>,
    pub margin: Option<String>,
    pub declarations: BTreeMap<String, String>,
}

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width. Input that is not a length leaves the field as it was.
    pub fn with_width(mut self, width: impl IntoCssLength) -> Self {
        if let Some(width) = width.into_css_length() {
            self.width = Some(width);
        }
        self
    }

    pub fn with_height(mut self, height: impl IntoCssLength) -> Self {
        if let Some(height) = height.into_css_length() {
            self.height = Some(height);
        }
        self
    }

    pub fn with_border_radius(mut self, radius: impl IntoCssLength) -> Self {
        if let Some(radius) = radius.into_css_length() {
            self.border_radius = Some(radius);
        }
        self
    }

    pub fn with_declaration(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.insert(kebab_case(property), value.into());
        self
    }

    /// The inline style of an element, empty when absent or malformed.
    pub fn from_attributes(attributes: &Attributes) -> Self {
        attributes
            .get("style")
            .map(Self::from_value)
            .unwrap_or_default()
    }

    /// Build from a `style` attribute value: a JSON object or a CSS string.
    /// Any other shape yields an empty fragment.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            Value::String(css) => Self::parse_css(css),
            _ => Self::default(),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut style = Self::default();
        for (property, value) in map {
            style.set(property, value);
        }
        style
    }

    /// Parse `"width: 100px; height: 2rem"` style declaration lists.
    pub fn parse_css(css: &str) -> Self {
        let mut style = Self::default();
        for declaration in split_declarations(css) {
            if let Some((property, value)) = declaration.split_once(':') {
                style.set(property.trim(), &Value::String(value.trim().to_string()));
            }
        }
        style
    }

    fn set(&mut self, property: &str, value: &Value) {
        let property = kebab_case(property);
        match property.as_str() {
            "width" => self.width = CssLength::from_value(value),
            "height" => self.height = CssLength::from_value(value),
            "border-radius" => self.border_radius = CssLength::from_value(value),
            "margin" => self.margin = CssLength::from_value(value).map(|m| m.to_string()),
            "" => {}
            _ => {
                let text = match value {
                    Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
                    Value::Number(n) => match n.as_f64() {
                        Some(n) if UNITLESS.contains(&property.as_str()) => format_number(n),
                        Some(n) => format!("{}px", format_number(n)),
                        None => return,
                    },
                    _ => return,
                };
                self.declarations.insert(property, text);
            }
        }
    }

    /// Whether any of width, height or border radius is present.
    pub fn has_geometry(&self) -> bool {
        self.width.is_some() || self.height.is_some() || self.border_radius.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_geometry() && self.margin.is_none() && self.declarations.is_empty()
    }

    /// Layer `other` on top of `self`; present fields in `other` win.
    pub fn overlay(&mut self, other: &StyleFragment) {
        if let Some(width) = &other.width {
            self.width = Some(width.clone());
        }
        if let Some(height) = &other.height {
            self.height = Some(height.clone());
        }
        if let Some(radius) = &other.border_radius {
            self.border_radius = Some(radius.clone());
        }
        if let Some(margin) = &other.margin {
            self.margin = Some(margin.clone());
        }
        for (property, value) in &other.declarations {
            self.declarations.insert(property.clone(), value.clone());
        }
    }

    /// Serialize to a CSS declaration list.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(width) = &self.width {
            parts.push(format!("width: {width}"));
        }
        if let Some(height) = &self.height {
            parts.push(format!("height: {height}"));
        }
        if let Some(radius) = &self.border_radius {
            parts.push(format!("border-radius: {radius}"));
        }
        if let Some(margin) = &self.margin {
            parts.push(format!("margin: {margin}"));
        }
        for (property, value) in &self.declarations {
            parts.push(format!("{property}: {value}"));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("{};", parts.join("; "))
        }
    }
}

impl From<Value> for StyleFragment {
    fn from(value: Value) -> Self {
        Self::from_value(&value)
    }
}

impl From<StyleFragment> for Value {
    fn from(style: StyleFragment) -> Self {
        let mut map = Map::new();
        if let Some(width) = style.width {
            map.insert("width".into(), Value::String(width.to_string()));
        }
        if let Some(height) = style.height {
            map.insert("height".into(), Value::String(height.to_string()));
        }
        if let Some(radius) = style.border_radius {
            map.insert("border-radius".into(), Value::String(radius.to_string()));
        }
        if let Some(margin) = style.margin {
            map.insert("margin".into(), Value::String(margin));
        }
        for (property, value) in style.declarations {
            map.insert(property, Value::String(value));
        }
        Value::Object(map)
    }
}

/// Split a declaration list on `;`, ignoring separators inside parentheses
/// or quotes so values like `url(data:image/png;base64,..)` stay whole.
fn split_declarations(css: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, ch) in css.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&css[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&css[start..]);
    parts
}

/// `borderRadius` -> `border-radius`. Already kebab-cased input is unchanged.
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.trim().chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
