use pretty_assertions::assert_eq;
use skeleton_engine::config::parse_defaults;
use skeleton_engine::{Fill, SynthesisContext};
use skeleton_types::{AutoSkeletonOptions, CssLength, LoaderDefaults, TargetNode, WaveDirection};

use crate::common::single_block;

const GALLERY_CONFIG: &str = include_str!("../../gallery/loading.toml");

#[test]
fn gallery_config_parses() {
    let defaults = parse_defaults(GALLERY_CONFIG).unwrap();
    assert_eq!(defaults.aria_label, "Loading profile...");
    assert_eq!(defaults.speed, 1.2);
    assert_eq!(
        defaults.styles["img"].border_radius,
        Some(CssLength::Percent(50.0))
    );
}

#[test]
fn configured_overrides_reach_the_blocks() {
    let defaults = parse_defaults(GALLERY_CONFIG).unwrap();
    let ctx = SynthesisContext::from_defaults(&defaults);
    let avatar = single_block(&TargetNode::tagged("img"), &ctx);
    assert_eq!(avatar.corner_radius, CssLength::Percent(50.0));
    let button = single_block(&TargetNode::tagged("button").child("Follow"), &ctx);
    assert_eq!(button.width, CssLength::Px(120.0));
}

#[test]
fn instance_options_beat_configured_defaults() {
    let defaults = parse_defaults(
        r#"
        [auto_skeleton]
        shimmer = true
        wave_direction = "top-to-bottom"

        [auto_skeleton.styles.h1]
        height = "3rem"
        "#,
    )
    .unwrap();
    let resolved = AutoSkeletonOptions {
        shimmer: Some(false),
        color: Some("#101010".into()),
        ..AutoSkeletonOptions::default()
    }
    .resolve(&defaults);
    assert_eq!(resolved.wave_direction, WaveDirection::TopToBottom);

    let ctx = SynthesisContext::from_defaults(&resolved);
    let block = single_block(&TargetNode::tagged("h1"), &ctx);
    assert_eq!(block.height, CssLength::Rem(3.0));
    assert_eq!(
        block.fill,
        Fill::Flat {
            color: "#101010".into()
        }
    );
}

#[test]
fn shimmer_settings_shape_the_fill() {
    let defaults = LoaderDefaults {
        wave_direction: WaveDirection::BottomToTop,
        speed: 3.0,
        ..LoaderDefaults::default()
    };
    let ctx = SynthesisContext::from_defaults(&defaults);
    let block = single_block(&TargetNode::tagged("p"), &ctx);
    let css = block.css();
    assert!(css.contains("linear-gradient(0deg,"), "{css}");
    assert!(css.contains("background-size: 100% 200%"), "{css}");
    assert!(css.contains("auto-skeleton-shimmer-btt 0.5s linear infinite"), "{css}");
}

#[test]
fn invalid_config_is_an_error_for_the_parser() {
    assert!(parse_defaults("[auto_skeleton]\nshimmer = \"yes\"").is_err());
    assert_eq!(parse_defaults("").unwrap(), LoaderDefaults::default());
}
