use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a composite node could not be materialized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenderErrorKind {
    /// The render function returned an error.
    Failed,
    /// The render function panicked.
    Panicked,
    /// Composite nodes nested past the resolution limit.
    DepthExceeded,
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderErrorKind::Failed => write!(f, "Failed"),
            RenderErrorKind::Panicked => write!(f, "Panicked"),
            RenderErrorKind::DepthExceeded => write!(f, "DepthExceeded"),
        }
    }
}

/// Error produced while invoking a composite node's render function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderError {
    pub kind: RenderErrorKind,
    /// Name of the composite that failed. Empty until the caller tags it.
    #[serde(default)]
    pub component: String,
    pub message: String,
}

impl RenderError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            kind: RenderErrorKind::Failed,
            component: String::new(),
            message: message.into(),
        }
    }

    pub fn panicked(message: impl Into<String>) -> Self {
        Self {
            kind: RenderErrorKind::Panicked,
            component: String::new(),
            message: message.into(),
        }
    }

    pub fn depth_exceeded(limit: usize) -> Self {
        Self {
            kind: RenderErrorKind::DepthExceeded,
            component: String::new(),
            message: format!("composite nesting exceeded {limit} levels"),
        }
    }

    /// Attach the composite's name, keeping an existing one.
    pub fn in_component(mut self, component: &str) -> Self {
        if self.component.is_empty() {
            self.component = component.to_string();
        }
        self
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.component.is_empty() {
            write!(f, "{}: {}", self.kind, self.message)
        } else {
            write!(f, "{} in <{}>: {}", self.kind, self.component, self.message)
        }
    }
}

impl std::error::Error for RenderError {}
