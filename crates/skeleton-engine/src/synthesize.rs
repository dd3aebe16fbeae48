//! Recursive skeleton synthesis.
//!
//! Depth-first, pre-order walk over the target tree. Containers keep their
//! nesting, leaves collapse into one block each, composites are rendered and
//! walked in place.

use crate::classify::{classify, NodeKind};
use crate::estimate::{estimate, is_inline_tag};
use crate::shimmer::Fill;
use skeleton_types::{
    Attributes, Composite, CssLength, LoaderDefaults, RenderError, ShimmerConfig, StyleFragment,
    StyleOverrides, TargetNode,
};
use serde_json::Value;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

/// Composite nesting past this depth is reported as a render failure.
pub const MAX_COMPOSITE_DEPTH: usize = 32;

const KEY_PREFIX: &str = "skeleton-";
const BLOCK_MARGIN: &str = "0 0 0.5em";
const INLINE_MARGIN: &str = "0 0.25em 0 0";

/// Inputs that shape a skeleton besides the tree itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisContext {
    pub overrides: StyleOverrides,
    pub inherit_styles: bool,
    pub shimmer: ShimmerConfig,
}

impl SynthesisContext {
    pub fn from_defaults(defaults: &LoaderDefaults) -> Self {
        Self {
            overrides: defaults.styles.clone(),
            inherit_styles: defaults.inherit_styles,
            shimmer: defaults.shimmer_config(),
        }
    }

    fn override_for(&self, tag: &str) -> Option<&StyleFragment> {
        self.overrides
            .get(tag)
            .or_else(|| self.overrides.get(&tag.to_ascii_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDisplay {
    Block,
    InlineBlock,
}

impl BlockDisplay {
    pub fn as_css(&self) -> &'static str {
        match self {
            BlockDisplay::Block => "block",
            BlockDisplay::InlineBlock => "inline-block",
        }
    }
}

/// One placeholder rectangle standing in for a leaf element.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonBlock {
    pub key: String,
    /// Tag of the node the block replaces.
    pub tag: String,
    pub display: BlockDisplay,
    pub width: CssLength,
    pub height: CssLength,
    pub corner_radius: CssLength,
    pub margin: String,
    pub fill: Fill,
    /// Non-geometry declarations from a style override.
    pub extra: BTreeMap<String, String>,
}

impl SkeletonBlock {
    /// Inline CSS for the block.
    pub fn css(&self) -> String {
        let mut parts = vec![
            format!("display: {}", self.display.as_css()),
            format!("width: {}", self.width),
            format!("height: {}", self.height),
            format!("border-radius: {}", self.corner_radius),
            format!("margin: {}", self.margin),
        ];
        for (property, value) in self.fill.declarations() {
            parts.push(format!("{property}: {value}"));
        }
        for (property, value) in &self.extra {
            parts.push(format!("{property}: {value}"));
        }
        format!("{};", parts.join("; "))
    }
}

/// A re-emitted structural element.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonContainer {
    pub key: String,
    pub tag: String,
    /// Scalar, non-event, non-style attributes of the original element.
    pub attributes: Attributes,
    pub style: StyleFragment,
    pub children: Vec<SkeletonNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkeletonNode {
    Block(SkeletonBlock),
    Container(SkeletonContainer),
    Fragment {
        key: String,
        children: Vec<SkeletonNode>,
    },
}

impl SkeletonNode {
    pub fn key(&self) -> &str {
        match self {
            SkeletonNode::Block(block) => &block.key,
            SkeletonNode::Container(container) => &container.key,
            SkeletonNode::Fragment { key, .. } => key,
        }
    }

    pub fn children(&self) -> &[SkeletonNode] {
        match self {
            SkeletonNode::Block(_) => &[],
            SkeletonNode::Container(container) => &container.children,
            SkeletonNode::Fragment { children, .. } => children,
        }
    }

    /// Every block in the subtree, in document order.
    pub fn blocks(&self) -> Vec<&SkeletonBlock> {
        let mut out = Vec::new();
        collect_blocks(self, &mut out);
        out
    }
}

fn collect_blocks<'a>(node: &'a SkeletonNode, out: &mut Vec<&'a SkeletonBlock>) {
    match node {
        SkeletonNode::Block(block) => out.push(block),
        _ => {
            for child in node.children() {
                collect_blocks(child, out);
            }
        }
    }
}

/// Synthesize the skeleton for one node at a positional index.
///
/// Returns `None` for nodes that contribute nothing. Several results (a
/// list, or a composite rendering a list) come back wrapped in a fragment.
pub fn synthesize(node: &TargetNode, index: usize, ctx: &SynthesisContext) -> Option<SkeletonNode> {
    let mut out = Vec::new();
    synthesize_into(node, index, KEY_PREFIX, ctx, 0, &mut out);

    if out.len() == 1 && !matches!(node, TargetNode::List(_)) {
        return out.pop();
    }
    if out.is_empty() && !matches!(node, TargetNode::List(_)) {
        return None;
    }
    Some(SkeletonNode::Fragment {
        key: format!("{KEY_PREFIX}{index}-list"),
        children: out,
    })
}

/// Synthesize a whole tree into its top-level skeleton nodes.
pub fn synthesize_root(node: &TargetNode, ctx: &SynthesisContext) -> Vec<SkeletonNode> {
    let mut out = Vec::new();
    synthesize_into(node, 0, KEY_PREFIX, ctx, 0, &mut out);
    out
}

fn synthesize_into(
    node: &TargetNode,
    index: usize,
    prefix: &str,
    ctx: &SynthesisContext,
    depth: usize,
    out: &mut Vec<SkeletonNode>,
) {
    match classify(node) {
        NodeKind::Empty | NodeKind::Primitive(_) => {}
        NodeKind::List(items) => {
            let item_prefix = format!("{prefix}{index}.");
            for (i, item) in items.iter().enumerate() {
                synthesize_into(item, i, &item_prefix, ctx, depth, out);
            }
        }
        NodeKind::Fragment(children) => {
            let key = format!("{prefix}{index}-fragment");
            let children = synthesize_children(children, &key, ctx, depth);
            out.push(SkeletonNode::Fragment { key, children });
        }
        NodeKind::Container {
            tag,
            attributes,
            children,
        } => {
            let key = format!("{prefix}{index}-{tag}");
            let mut style = if ctx.inherit_styles {
                StyleFragment::from_attributes(attributes)
            } else {
                StyleFragment::default()
            };
            if let Some(fragment) = ctx.override_for(tag) {
                style.overlay(fragment);
            }
            let children = synthesize_children(children, &key, ctx, depth);
            out.push(SkeletonNode::Container(SkeletonContainer {
                key,
                tag: tag.to_string(),
                attributes: semantic_attributes(attributes),
                style,
                children,
            }));
        }
        NodeKind::Leaf {
            tag,
            attributes,
            children,
        } => {
            let key = format!("{prefix}{index}-{tag}");
            out.push(SkeletonNode::Block(leaf_block(
                key, tag, attributes, children, ctx,
            )));
        }
        NodeKind::Composite(composite) => match render_composite(composite, depth) {
            Ok(rendered) => synthesize_into(&rendered, index, prefix, ctx, depth + 1, out),
            Err(error) => {
                tracing::warn!(
                    component = %composite.name,
                    error = %error,
                    "Composite render failed during skeleton synthesis; using fallback block"
                );
                let key = format!("{prefix}{index}-{}", composite.name);
                out.push(SkeletonNode::Block(leaf_block(
                    key,
                    &composite.name,
                    &composite.attributes,
                    &[],
                    ctx,
                )));
            }
        },
    }
}

fn synthesize_children(
    children: &[TargetNode],
    parent_key: &str,
    ctx: &SynthesisContext,
    depth: usize,
) -> Vec<SkeletonNode> {
    let prefix = format!("{parent_key}/");
    let mut out = Vec::new();
    for (i, child) in children.iter().enumerate() {
        synthesize_into(child, i, &prefix, ctx, depth, &mut out);
    }
    out
}

/// Geometry layers, lowest precedence first: estimate, inherited inline
/// style, explicit override.
fn leaf_block(
    key: String,
    tag: &str,
    attributes: &Attributes,
    children: &[TargetNode],
    ctx: &SynthesisContext,
) -> SkeletonBlock {
    let mut geometry = estimate(tag, attributes, children);
    let mut margin = None;
    let mut extra = BTreeMap::new();

    if ctx.inherit_styles {
        let inline = StyleFragment::from_attributes(attributes);
        geometry.overlay(&inline);
        margin = inline.margin;
    }
    if let Some(fragment) = ctx.override_for(tag) {
        geometry.overlay(fragment);
        if fragment.margin.is_some() {
            margin = fragment.margin.clone();
        }
        extra = fragment.declarations.clone();
    }

    let display = if is_inline_tag(tag) {
        BlockDisplay::InlineBlock
    } else {
        BlockDisplay::Block
    };
    let margin = margin.unwrap_or_else(|| match display {
        BlockDisplay::Block => BLOCK_MARGIN.to_string(),
        BlockDisplay::InlineBlock => INLINE_MARGIN.to_string(),
    });

    SkeletonBlock {
        key,
        tag: tag.to_string(),
        display,
        width: geometry.width,
        height: geometry.height,
        corner_radius: geometry.corner_radius,
        margin,
        fill: Fill::from_config(&ctx.shimmer),
        extra,
    }
}

/// Invoke a composite's render function, catching both errors and panics.
///
/// Render functions may assume a live render scope (hooks, context) that
/// does not exist during an offline walk; a panic from that is converted
/// into a [`RenderError`] instead of unwinding through the caller.
///
/// Panics are only recoverable where they unwind. Targets built with
/// `panic = "abort"`, which includes `wasm32-unknown-unknown`, terminate on a
/// panicking render function; only `Err` results are recovered there.
pub fn render_composite(composite: &Composite, depth: usize) -> Result<TargetNode, RenderError> {
    if depth >= MAX_COMPOSITE_DEPTH {
        return Err(RenderError::depth_exceeded(MAX_COMPOSITE_DEPTH).in_component(&composite.name));
    }
    match panic::catch_unwind(AssertUnwindSafe(|| composite.render())) {
        Ok(result) => result.map_err(|e| e.in_component(&composite.name)),
        Err(payload) => {
            Err(RenderError::panicked(panic_message(payload.as_ref())).in_component(&composite.name))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "render function panicked".to_string()
    }
}

/// Attributes worth keeping on a re-emitted container: no style, no event
/// handlers, scalar values only.
fn semantic_attributes(attributes: &Attributes) -> Attributes {
    attributes
        .iter()
        .filter(|(name, value)| {
            name.as_str() != "style"
                && !is_event_handler(name)
                && matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

fn is_event_handler(name: &str) -> bool {
    name.len() > 2 && name.get(..2).is_some_and(|p| p.eq_ignore_ascii_case("on"))
}
