use pretty_assertions::assert_eq;
use serde_json::json;
use skeleton_engine::synthesize::MAX_COMPOSITE_DEPTH;
use skeleton_engine::{render_composite, synthesize, SkeletonNode, SynthesisContext};
use skeleton_types::{Attributes, CssLength, RenderError, RenderErrorKind, TargetNode};

use crate::common::{badge, blocks, single_block};

#[test]
fn composite_skeleton_equals_skeleton_of_its_output() {
    let mut attrs = Attributes::new();
    attrs.insert("label".into(), json!("Owner"));
    let composite = TargetNode::composite("Badge", attrs.clone(), badge);
    let rendered = badge(&attrs).unwrap();

    let ctx = SynthesisContext::default();
    assert_eq!(
        synthesize(&composite, 2, &ctx),
        synthesize(&rendered, 2, &ctx)
    );
}

#[test]
fn composite_rendering_a_container_mirrors_it() {
    let card = TargetNode::composite("Card", Attributes::new(), |_| {
        Ok(TargetNode::tagged("div")
            .child(TargetNode::tagged("h3").child("Heading"))
            .child(TargetNode::tagged("p").child("Body copy")))
    });
    let Some(SkeletonNode::Container(div)) = synthesize(&card, 0, &SynthesisContext::default())
    else {
        panic!("expected the composite to resolve to a container");
    };
    assert_eq!(div.tag, "div");
    assert_eq!(div.key, "skeleton-0-div");
    let tags: Vec<&str> = div
        .children
        .iter()
        .map(|child| match child {
            SkeletonNode::Block(block) => block.tag.as_str(),
            other => panic!("expected a block, got {other:?}"),
        })
        .collect();
    assert_eq!(tags, vec!["h3", "p"]);
}

#[test]
fn nested_composites_resolve_through_every_level() {
    let inner = TargetNode::composite("Inner", Attributes::new(), |_| {
        Ok(TargetNode::tagged("section").child(TargetNode::tagged("h4").child("Deep")))
    });
    let outer = TargetNode::composite("Outer", Attributes::new(), move |_| {
        Ok(TargetNode::fragment([inner.clone()]))
    });
    let tags: Vec<String> = blocks(&outer, &SynthesisContext::default())
        .into_iter()
        .map(|b| b.tag)
        .collect();
    assert_eq!(tags, vec!["h4".to_string()]);
}

#[test]
fn failing_composite_becomes_fallback_block() {
    let mut attrs = Attributes::new();
    attrs.insert("style".into(), json!({ "width": "40%", "height": 90 }));
    let tree = TargetNode::tagged("div")
        .child(TargetNode::tagged("h1").child("Before"))
        .child(TargetNode::composite("Chart", attrs, |_| {
            Err(RenderError::failed("data not loaded"))
        }))
        .child(TargetNode::tagged("p").child("After"));

    let all = blocks(&tree, &SynthesisContext::default());
    let tags: Vec<&str> = all.iter().map(|b| b.tag.as_str()).collect();
    assert_eq!(tags, vec!["h1", "Chart", "p"]);
    assert_eq!(all[1].width, CssLength::Percent(40.0));
    assert_eq!(all[1].height, CssLength::Px(90.0));
}

#[test]
fn panicking_composite_becomes_fallback_block() {
    let tree = TargetNode::tagged("div")
        .child(TargetNode::composite("NeedsContext", Attributes::new(), |_| {
            panic!("context not available outside a render scope")
        }))
        .child(TargetNode::tagged("p").child("Survives"));

    let all = blocks(&tree, &SynthesisContext::default());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].tag, "NeedsContext");
    assert_eq!(all[0].width, CssLength::Percent(100.0));
    assert_eq!(all[0].height, CssLength::Em(1.3));
}

#[test]
fn composite_returning_nothing_contributes_nothing() {
    let tree = TargetNode::tagged("div")
        .child(TargetNode::composite("Hidden", Attributes::new(), |_| Ok(TargetNode::Empty)));
    assert!(blocks(&tree, &SynthesisContext::default()).is_empty());
}

#[test]
fn runaway_recursion_is_bounded() {
    fn forever(attrs: &Attributes) -> Result<TargetNode, RenderError> {
        Ok(TargetNode::tagged("div").child(TargetNode::composite(
            "Forever",
            attrs.clone(),
            forever,
        )))
    }
    let tree = TargetNode::composite("Forever", Attributes::new(), forever);
    let all = blocks(&tree, &SynthesisContext::default());
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].tag, "Forever");
}

#[test]
fn render_composite_names_the_failing_component() {
    let composite = skeleton_types::Composite::new("Profile", Attributes::new(), |_| {
        Err(RenderError::failed("offline"))
    });
    let err = render_composite(&composite, 0).unwrap_err();
    assert_eq!(err.kind, RenderErrorKind::Failed);
    assert_eq!(err.to_string(), "Failed in <Profile>: offline");

    let err = render_composite(&composite, MAX_COMPOSITE_DEPTH + 1).unwrap_err();
    assert_eq!(err.kind, RenderErrorKind::DepthExceeded);
}

#[test]
fn fallback_block_respects_overrides_by_component_name() {
    let mut overrides = skeleton_types::StyleOverrides::new();
    overrides.insert(
        "Chart".into(),
        skeleton_types::StyleFragment::new().with_height(200),
    );
    let ctx = SynthesisContext {
        overrides,
        ..SynthesisContext::default()
    };
    let node = TargetNode::composite("Chart", Attributes::new(), |_| {
        Err(RenderError::failed("no data"))
    });
    assert_eq!(single_block(&node, &ctx).height, CssLength::Px(200.0));
}
