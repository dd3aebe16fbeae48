use pretty_assertions::assert_eq;
use serde_json::json;
use skeleton_engine::{BlockDisplay, SynthesisContext};
use skeleton_types::{CssLength, StyleFragment, StyleOverrides, TargetNode};

use crate::common::{blocks, single_block};

fn with_overrides(entries: &[(&str, StyleFragment)]) -> SynthesisContext {
    let overrides: StyleOverrides = entries
        .iter()
        .map(|(tag, fragment)| (tag.to_string(), fragment.clone()))
        .collect();
    SynthesisContext {
        overrides,
        ..SynthesisContext::default()
    }
}

#[test]
fn title_paragraph_image_scenario() {
    let tree = TargetNode::tagged("div")
        .child(TargetNode::tagged("h1").child("Title"))
        .child(TargetNode::tagged("p").child("A short paragraph."))
        .child(TargetNode::tagged("img"));
    let all = blocks(&tree, &SynthesisContext::default());
    assert_eq!(all.len(), 3);

    assert_eq!(all[0].width, CssLength::Percent(100.0));
    assert_eq!(all[0].height, CssLength::Em(2.0));

    assert_eq!(all[1].width, CssLength::Percent(36.0));
    assert_eq!(all[1].height, CssLength::Em(1.3));

    assert_eq!(all[2].width, CssLength::Px(100.0));
    assert_eq!(all[2].height, CssLength::Px(100.0));
    assert_eq!(all[2].corner_radius, CssLength::Px(8.0));
}

#[test]
fn override_beats_estimate() {
    let ctx = with_overrides(&[("h1", StyleFragment::new().with_height("3rem"))]);
    let block = single_block(&TargetNode::tagged("h1").child("Title"), &ctx);
    assert_eq!(block.height, CssLength::Rem(3.0));
    assert_eq!(block.width, CssLength::Percent(100.0));
}

#[test]
fn override_beats_inherited_style() {
    let mut ctx = with_overrides(&[("img", StyleFragment::new().with_border_radius("50%"))]);
    ctx.inherit_styles = true;
    let node = TargetNode::tagged("img").style(json!({ "borderRadius": 2, "width": 64 }));
    let block = single_block(&node, &ctx);
    assert_eq!(block.corner_radius, CssLength::Percent(50.0));
    assert_eq!(block.width, CssLength::Px(64.0));
}

#[test]
fn inherited_style_beats_estimate_only_when_enabled() {
    let node = TargetNode::tagged("p")
        .child("Short")
        .style(json!({ "width": "240px", "height": "2em", "margin": "4px" }));

    let plain = single_block(&node, &SynthesisContext::default());
    assert_eq!(plain.width, CssLength::Percent(30.0));
    assert_eq!(plain.margin, "0 0 0.5em");

    let inherit = SynthesisContext {
        inherit_styles: true,
        ..SynthesisContext::default()
    };
    let block = single_block(&node, &inherit);
    assert_eq!(block.width, CssLength::Px(240.0));
    assert_eq!(block.height, CssLength::Em(2.0));
    assert_eq!(block.margin, "4px");
}

#[test]
fn inherit_falls_back_to_estimate_for_missing_dimensions() {
    let inherit = SynthesisContext {
        inherit_styles: true,
        ..SynthesisContext::default()
    };
    let node = TargetNode::tagged("h3").style(json!({ "width": "50%" }));
    let block = single_block(&node, &inherit);
    assert_eq!(block.width, CssLength::Percent(50.0));
    assert_eq!(block.height, CssLength::Em(1.5));
}

#[test]
fn longer_text_is_never_narrower() {
    let ctx = SynthesisContext::default();
    let widths: Vec<f64> = [0, 5, 15, 25, 40, 49, 50, 80, 500]
        .into_iter()
        .map(|n| {
            let node = TargetNode::tagged("span").child("x".repeat(n));
            match single_block(&node, &ctx).width {
                CssLength::Percent(p) => p,
                other => panic!("expected percent width, got {other:?}"),
            }
        })
        .collect();
    assert!(widths.windows(2).all(|w| w[0] <= w[1]), "{widths:?}");
    assert_eq!(widths.first(), Some(&30.0));
    assert_eq!(widths.last(), Some(&100.0));
}

#[test]
fn inline_tags_render_inline_block() {
    let ctx = SynthesisContext::default();
    assert_eq!(
        single_block(&TargetNode::tagged("span"), &ctx).display,
        BlockDisplay::InlineBlock
    );
    assert_eq!(
        single_block(&TargetNode::tagged("p"), &ctx).display,
        BlockDisplay::Block
    );
}

#[test]
fn malformed_style_values_are_ignored() {
    let inherit = SynthesisContext {
        inherit_styles: true,
        ..SynthesisContext::default()
    };
    let node = TargetNode::tagged("img").style(json!({ "width": null, "height": [1, 2] }));
    let block = single_block(&node, &inherit);
    assert_eq!(block.width, CssLength::Px(100.0));
    assert_eq!(block.height, CssLength::Px(100.0));
}

#[test]
fn blank_override_lengths_keep_the_estimate() {
    let ctx = with_overrides(&[(
        "p",
        StyleFragment::new().with_width("  ").with_height(""),
    )]);
    let block = single_block(&TargetNode::tagged("p").child("hello"), &ctx);
    assert_eq!(block.width, CssLength::Percent(30.0));
    assert_eq!(block.height, CssLength::Em(1.3));
    assert!(!block.css().contains("width: ;"), "{}", block.css());
}
