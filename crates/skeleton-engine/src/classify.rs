use skeleton_types::{Attributes, Composite, Primitive, TargetNode};

/// Structural tags. These keep their nesting in the skeleton; every other
/// tag collapses into a single block.
pub const CONTAINER_TAGS: &[&str] = &[
    "div", "section", "article", "header", "footer", "main", "nav", "aside", "ul", "ol", "form",
    "fieldset", "figure", "table", "thead", "tbody", "tfoot", "tr",
];

/// What a node contributes to a skeleton, with borrowed access to its parts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind<'a> {
    Empty,
    Primitive(&'a Primitive),
    List(&'a [TargetNode]),
    Fragment(&'a [TargetNode]),
    Container {
        tag: &'a str,
        attributes: &'a Attributes,
        children: &'a [TargetNode],
    },
    Leaf {
        tag: &'a str,
        attributes: &'a Attributes,
        children: &'a [TargetNode],
    },
    Composite(&'a Composite),
}

pub fn is_container_tag(tag: &str) -> bool {
    CONTAINER_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Classify one node. Total over every variant.
pub fn classify(node: &TargetNode) -> NodeKind<'_> {
    match node {
        TargetNode::Empty => NodeKind::Empty,
        TargetNode::Primitive(primitive) => NodeKind::Primitive(primitive),
        TargetNode::List(items) => NodeKind::List(items),
        TargetNode::Fragment(children) => NodeKind::Fragment(children),
        TargetNode::Tagged {
            tag,
            attributes,
            children,
        } if is_container_tag(tag) => NodeKind::Container {
            tag,
            attributes,
            children,
        },
        TargetNode::Tagged {
            tag,
            attributes,
            children,
        } => NodeKind::Leaf {
            tag,
            attributes,
            children,
        },
        TargetNode::Composite(composite) => NodeKind::Composite(composite),
    }
}
