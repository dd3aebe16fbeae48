//! Rendering of skeleton and target trees into Dioxus elements.
//!
//! Tags and attribute names are runtime strings in the tree but have to be
//! `'static` for the renderer, so both go through fixed tables. Unknown tags
//! render as `div`, unknown attributes are dropped.

use crate::components::skeleton::Skeleton;
use dioxus::prelude::*;
use serde_json::Value;
use skeleton_engine::{render_composite, SkeletonNode};
use skeleton_types::{Attributes, StyleFragment, TargetNode};

/// Attribute names forwarded onto rendered elements.
const FORWARDED_ATTRIBUTES: &[&str] = &[
    "id",
    "class",
    "role",
    "title",
    "lang",
    "dir",
    "alt",
    "src",
    "href",
    "type",
    "name",
    "value",
    "placeholder",
    "for",
    "width",
    "height",
    "colspan",
    "rowspan",
    "tabindex",
    "data-testid",
];

/// WAI-ARIA 1.2 states and properties.
const ARIA_ATTRIBUTES: &[&str] = &[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-braillelabel",
    "aria-brailleroledescription",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindex",
    "aria-colindextext",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-description",
    "aria-details",
    "aria-disabled",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowindextext",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

/// Resolve an attribute name to its rendered spelling.
pub fn forwarded_name(name: &str) -> Option<&'static str> {
    match name {
        "className" => Some("class"),
        "htmlFor" => Some("for"),
        _ => FORWARDED_ATTRIBUTES
            .iter()
            .chain(ARIA_ATTRIBUTES)
            .copied()
            .find(|n| *n == name),
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Build the attribute list for one element. `style` replaces whatever
/// `style` the attribute map carries.
pub fn element_attributes(attributes: &Attributes, style: Option<String>) -> Vec<Attribute> {
    let mut out: Vec<Attribute> = attributes
        .iter()
        .filter_map(|(name, value)| {
            let name = forwarded_name(name)?;
            let text = attribute_text(value)?;
            Some(Attribute::new(name, text, None, false))
        })
        .collect();
    if let Some(style) = style.filter(|s| !s.is_empty()) {
        out.push(Attribute::new("style", style, None, false));
    }
    out
}

/// Render `$body` inside the element named by `$tag`.
macro_rules! tagged_element {
    ($tag:expr, $attrs:ident, $body:ident; [$($name:ident),* $(,)?]; void [$($void:ident),* $(,)?]) => {
        match $tag.to_ascii_lowercase().as_str() {
            $(stringify!($name) => rsx! { $name { ..$attrs, {$body} } },)*
            $(stringify!($void) => rsx! { $void { ..$attrs } },)*
            _ => rsx! { div { ..$attrs, {$body} } },
        }
    };
}

fn render_tagged(tag: &str, attrs: Vec<Attribute>, body: Element) -> Element {
    tagged_element!(tag, attrs, body;
        [
            div, section, article, header, footer, main, nav, aside, ul, ol, form, fieldset,
            figure, table, thead, tbody, tfoot, tr, p, span, label, small, strong, em, b, i, a,
            li, td, th, blockquote, code, caption, figcaption, h1, h2, h3, h4, h5, h6, button,
            textarea, select, option, video, canvas, picture, iframe, svg, pre,
        ];
        void [img, input, br, hr]
    )
}

pub(crate) fn keyed(nodes: &[SkeletonNode]) -> impl Iterator<Item = (String, SkeletonNode)> + '_ {
    nodes.iter().map(|node| (node.key().to_string(), node.clone()))
}

/// One synthesized skeleton node.
#[component]
pub fn SkeletonView(node: SkeletonNode) -> Element {
    match node {
        SkeletonNode::Block(block) => rsx! {
            Skeleton { block: block }
        },
        SkeletonNode::Container(container) => {
            let attrs = element_attributes(&container.attributes, Some(container.style.to_css()));
            let body = rsx! {
                for (key, child) in keyed(&container.children) {
                    SkeletonView { key: "{key}", node: child }
                }
            };
            render_tagged(&container.tag, attrs, body)
        }
        SkeletonNode::Fragment { children, .. } => rsx! {
            for (key, child) in keyed(&children) {
                SkeletonView { key: "{key}", node: child }
            }
        },
    }
}

/// A target tree rendered as-is. Composites are invoked through the same
/// isolation boundary as synthesis; a failing one renders nothing.
#[component]
pub fn TargetView(node: TargetNode, #[props(default)] depth: usize) -> Element {
    match node {
        TargetNode::Empty => rsx! {},
        TargetNode::Primitive(primitive) => rsx! { "{primitive}" },
        TargetNode::Fragment(children) | TargetNode::List(children) => rsx! {
            for (i, child) in children.iter().enumerate() {
                TargetView { key: "{i}", node: child.clone(), depth: depth }
            }
        },
        TargetNode::Tagged {
            tag,
            attributes,
            children,
        } => {
            let style = StyleFragment::from_attributes(&attributes).to_css();
            let attrs = element_attributes(&attributes, Some(style));
            let body = rsx! {
                for (i, child) in children.iter().enumerate() {
                    TargetView { key: "{i}", node: child.clone(), depth: depth }
                }
            };
            render_tagged(&tag, attrs, body)
        }
        TargetNode::Composite(composite) => match render_composite(&composite, depth) {
            Ok(rendered) => rsx! {
                TargetView { node: rendered, depth: depth + 1 }
            },
            Err(e) => {
                tracing::error!(component = %composite.name, error = %e, "Composite render failed");
                rsx! {}
            }
        },
    }
}
