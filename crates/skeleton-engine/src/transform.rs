use crate::synthesize::{synthesize_root, SkeletonNode, SynthesisContext};
use skeleton_types::TargetNode;

/// What the auto-skeleton shows for one render.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformed<'a> {
    /// Not loading: the caller's tree, untouched.
    Passthrough(&'a TargetNode),
    /// Loading: placeholder nodes mirroring the tree.
    Skeleton(Vec<SkeletonNode>),
}

/// Top-level switch between passthrough and synthesis.
///
/// Nothing is classified or estimated when `loading` is false.
pub fn transform<'a>(tree: &'a TargetNode, loading: bool, ctx: &SynthesisContext) -> Transformed<'a> {
    if !loading {
        return Transformed::Passthrough(tree);
    }
    let nodes = synthesize_root(tree, ctx);
    tracing::trace!(top_level = nodes.len(), "Synthesized skeleton");
    Transformed::Skeleton(nodes)
}
