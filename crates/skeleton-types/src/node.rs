//! The target tree handed to the auto-skeleton.
//!
//! Nodes are plain data apart from [`Composite`], which holds a render
//! function that has to be called to find out what it draws.

use crate::error::RenderError;
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;

/// Element attributes. The inline style lives under the `"style"` key.
pub type Attributes = Map<String, Value>;

/// Render function of a composite node.
pub type RenderFn = Rc<dyn Fn(&Attributes) -> Result<TargetNode, RenderError>>;

/// Text or number content. Contributes nothing to a skeleton.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(String),
    Number(f64),
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Text(s) => f.write_str(s),
            Primitive::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A node of a caller-owned UI tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetNode {
    Tagged {
        tag: String,
        attributes: Attributes,
        children: Vec<TargetNode>,
    },
    Composite(Composite),
    Fragment(Vec<TargetNode>),
    List(Vec<TargetNode>),
    Primitive(Primitive),
    Empty,
}

impl TargetNode {
    pub fn tagged(tag: impl Into<String>) -> Self {
        TargetNode::Tagged {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        TargetNode::Primitive(Primitive::Text(text.into()))
    }

    pub fn fragment(children: impl IntoIterator<Item = TargetNode>) -> Self {
        TargetNode::Fragment(children.into_iter().collect())
    }

    pub fn list(items: impl IntoIterator<Item = TargetNode>) -> Self {
        TargetNode::List(items.into_iter().collect())
    }

    pub fn composite<F>(name: impl Into<String>, attributes: Attributes, render: F) -> Self
    where
        F: Fn(&Attributes) -> Result<TargetNode, RenderError> + 'static,
    {
        TargetNode::Composite(Composite::new(name, attributes, render))
    }

    /// Set an attribute. No-op on anything but a tagged node.
    pub fn attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        if let TargetNode::Tagged { attributes, .. } = &mut self {
            attributes.insert(name.to_string(), value.into());
        }
        self
    }

    /// Set the inline `style` attribute (JSON object or CSS string).
    pub fn style(self, style: impl Into<Value>) -> Self {
        self.attr("style", style)
    }

    /// Append a child. No-op on anything but a tagged node.
    pub fn child(mut self, child: impl Into<TargetNode>) -> Self {
        if let TargetNode::Tagged { children, .. } = &mut self {
            children.push(child.into());
        }
        self
    }

    pub fn children<I, C>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TargetNode>,
    {
        if let TargetNode::Tagged { children, .. } = &mut self {
            children.extend(items.into_iter().map(Into::into));
        }
        self
    }

    /// Concatenated text of all primitive descendants.
    ///
    /// Composites are not invoked, so their content does not count.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &TargetNode, out: &mut String) {
    match node {
        TargetNode::Primitive(primitive) => out.push_str(&primitive.to_string()),
        TargetNode::Tagged { children, .. }
        | TargetNode::Fragment(children)
        | TargetNode::List(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        TargetNode::Composite(_) | TargetNode::Empty => {}
    }
}

impl From<&str> for TargetNode {
    fn from(value: &str) -> Self {
        TargetNode::text(value)
    }
}

impl From<String> for TargetNode {
    fn from(value: String) -> Self {
        TargetNode::text(value)
    }
}

impl From<f64> for TargetNode {
    fn from(value: f64) -> Self {
        TargetNode::Primitive(Primitive::Number(value))
    }
}

impl From<i64> for TargetNode {
    fn from(value: i64) -> Self {
        TargetNode::Primitive(Primitive::Number(value as f64))
    }
}

impl<T: Into<TargetNode>> From<Option<T>> for TargetNode {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TargetNode::Empty)
    }
}

impl From<Vec<TargetNode>> for TargetNode {
    fn from(value: Vec<TargetNode>) -> Self {
        TargetNode::List(value)
    }
}

/// A deferred subtree: a named render function plus the attributes it is
/// called with.
#[derive(Clone)]
pub struct Composite {
    pub name: String,
    pub attributes: Attributes,
    render: RenderFn,
}

impl Composite {
    pub fn new<F>(name: impl Into<String>, attributes: Attributes, render: F) -> Self
    where
        F: Fn(&Attributes) -> Result<TargetNode, RenderError> + 'static,
    {
        Self {
            name: name.into(),
            attributes,
            render: Rc::new(render),
        }
    }

    /// Call the render function with this node's attributes.
    ///
    /// Panics inside the render function are not caught here.
    pub fn render(&self) -> Result<TargetNode, RenderError> {
        (self.render)(&self.attributes)
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.attributes == other.attributes
            && Rc::ptr_eq(&self.render, &other.render)
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
