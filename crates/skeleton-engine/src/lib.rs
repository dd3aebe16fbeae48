//! Auto-skeleton tree transformer.
//!
//! Walks a [`TargetNode`](skeleton_types::TargetNode) tree and produces a
//! parallel tree of placeholder blocks sized after the original nodes.

pub mod classify;
pub mod config;
pub mod estimate;
pub mod shimmer;
pub mod synthesize;
pub mod transform;

pub use classify::{classify, is_container_tag, NodeKind};
pub use estimate::{estimate, EstimatedGeometry};
pub use shimmer::Fill;
pub use synthesize::{
    render_composite, synthesize, synthesize_root, BlockDisplay, SkeletonBlock,
    SkeletonContainer, SkeletonNode, SynthesisContext,
};
pub use transform::{transform, Transformed};
