use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A CSS length as it crosses into a style declaration.
///
/// Bare numbers are pixels, matching how inline style objects treat them.
/// Anything that is not a recognizable number-with-unit (`auto`, `calc(..)`,
/// `fit-content`) is carried through untouched as [`CssLength::Raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "String")]
pub enum CssLength {
    Px(f64),
    Percent(f64),
    Em(f64),
    Rem(f64),
    Raw(String),
}

impl CssLength {
    /// Parse a CSS length string. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<f64>() {
            return n.is_finite().then_some(CssLength::Px(n));
        }

        // Order matters: "rem" must be tried before "em".
        let units: [(&str, fn(f64) -> CssLength); 4] = [
            ("rem", CssLength::Rem),
            ("em", CssLength::Em),
            ("px", CssLength::Px),
            ("%", CssLength::Percent),
        ];
        for (suffix, make) in units {
            if let Some(number) = trimmed.strip_suffix(suffix) {
                if let Ok(n) = number.trim().parse::<f64>() {
                    if n.is_finite() {
                        return Some(make(n));
                    }
                }
            }
        }

        Some(CssLength::Raw(trimmed.to_string()))
    }

    /// Lenient conversion from an attribute or style value.
    ///
    /// Numbers and strings are accepted; booleans, nulls, arrays, objects and
    /// blank strings count as "no value".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).map(CssLength::Px),
            Value::String(s) => Self::parse(s),
            _ => None,
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Px(n) => write!(f, "{}px", format_number(*n)),
            CssLength::Percent(n) => write!(f, "{}%", format_number(*n)),
            CssLength::Em(n) => write!(f, "{}em", format_number(*n)),
            CssLength::Rem(n) => write!(f, "{}rem", format_number(*n)),
            CssLength::Raw(s) => f.write_str(s),
        }
    }
}

/// Values accepted where a length is built in code.
pub trait IntoCssLength {
    /// `None` when the value does not describe a length.
    fn into_css_length(self) -> Option<CssLength>;
}

impl IntoCssLength for CssLength {
    fn into_css_length(self) -> Option<CssLength> {
        Some(self)
    }
}

impl IntoCssLength for f64 {
    fn into_css_length(self) -> Option<CssLength> {
        self.is_finite().then_some(CssLength::Px(self))
    }
}

impl IntoCssLength for i32 {
    fn into_css_length(self) -> Option<CssLength> {
        Some(CssLength::Px(f64::from(self)))
    }
}

impl IntoCssLength for &str {
    fn into_css_length(self) -> Option<CssLength> {
        CssLength::parse(self)
    }
}

impl From<CssLength> for String {
    fn from(value: CssLength) -> Self {
        value.to_string()
    }
}

impl TryFrom<Value> for CssLength {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(&value).ok_or_else(|| format!("not a CSS length: {value}"))
    }
}

/// Render a number without a trailing `.0` and with at most three decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let fixed = format!("{value:.3}");
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
