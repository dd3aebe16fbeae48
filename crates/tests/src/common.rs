use serde_json::json;
use skeleton_engine::{
    classify, render_composite, synthesize, NodeKind, SkeletonBlock, SkeletonNode,
    SynthesisContext,
};
use skeleton_types::{Attributes, RenderError, TargetNode};

/// A profile card touching every node kind: containers, leaves of each
/// heuristic class, a list, a fragment, and a working composite.
pub fn profile_tree() -> TargetNode {
    let mut badge_attrs = Attributes::new();
    badge_attrs.insert("label".into(), json!("Admin"));

    TargetNode::tagged("article")
        .attr("role", "article")
        .child(
            TargetNode::tagged("header")
                .child(TargetNode::tagged("img").attr("width", 48).attr("height", 48))
                .child(TargetNode::tagged("h2").child("Grace Hopper")),
        )
        .child(TargetNode::tagged("p").child("Computer scientist and rear admiral."))
        .child(
            TargetNode::tagged("ul").child(TargetNode::list(
                ["COBOL", "Compilers", "Navy"]
                    .into_iter()
                    .map(|s| TargetNode::tagged("li").child(s)),
            )),
        )
        .child(TargetNode::fragment([
            TargetNode::tagged("small").child("Joined 1944"),
            TargetNode::text("stray text"),
        ]))
        .child(TargetNode::composite("Badge", badge_attrs, badge))
        .child(TargetNode::tagged("button").child("Message"))
}

pub fn badge(attrs: &Attributes) -> Result<TargetNode, RenderError> {
    let label = attrs
        .get("label")
        .and_then(|v| v.as_str())
        .ok_or_else(|| RenderError::failed("missing label"))?;
    Ok(TargetNode::tagged("span").attr("class", "badge").child(label.to_string()))
}

/// Counts of (containers, leaves) after resolving composites in place.
pub fn shape(node: &TargetNode) -> (usize, usize) {
    match classify(node) {
        NodeKind::Empty | NodeKind::Primitive(_) => (0, 0),
        NodeKind::List(children) | NodeKind::Fragment(children) => sum(children),
        NodeKind::Container { children, .. } => {
            let (containers, leaves) = sum(children);
            (containers + 1, leaves)
        }
        NodeKind::Leaf { .. } => (0, 1),
        NodeKind::Composite(composite) => match render_composite(composite, 0) {
            Ok(rendered) => shape(&rendered),
            Err(_) => (0, 1),
        },
    }
}

fn sum(children: &[TargetNode]) -> (usize, usize) {
    children.iter().map(shape).fold((0, 0), |acc, s| (acc.0 + s.0, acc.1 + s.1))
}

/// Counts of (containers, blocks) in a skeleton.
pub fn skeleton_shape(node: &SkeletonNode) -> (usize, usize) {
    let own = match node {
        SkeletonNode::Block(_) => (0, 1),
        SkeletonNode::Container(_) => (1, 0),
        SkeletonNode::Fragment { .. } => (0, 0),
    };
    node.children()
        .iter()
        .map(skeleton_shape)
        .fold(own, |acc, s| (acc.0 + s.0, acc.1 + s.1))
}

pub fn blocks(node: &TargetNode, ctx: &SynthesisContext) -> Vec<SkeletonBlock> {
    synthesize(node, 0, ctx)
        .map(|tree| tree.blocks().into_iter().cloned().collect())
        .unwrap_or_default()
}

pub fn single_block(node: &TargetNode, ctx: &SynthesisContext) -> SkeletonBlock {
    let mut all = blocks(node, ctx);
    assert_eq!(all.len(), 1, "expected exactly one block, got {all:?}");
    all.remove(0)
}
