use dioxus::prelude::*;
use skeleton_engine::SkeletonBlock;

#[derive(Props, Clone, PartialEq)]
pub struct SkeletonProps {
    /// Geometry and fill computed by the synthesizer. Without one the
    /// placeholder is a full-width pulsing text line.
    #[props(default)]
    pub block: Option<SkeletonBlock>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// A neutral placeholder block. Hidden from assistive technology; the
/// surrounding status region announces the loading state instead.
#[component]
pub fn Skeleton(props: SkeletonProps) -> Element {
    let mut base = vec![Attribute::new("aria-hidden", "true", None, false)];
    match &props.block {
        Some(block) => {
            base.push(Attribute::new("class", "skeleton skeleton-block", None, false));
            base.push(Attribute::new("style", block.css(), None, false));
            base.push(Attribute::new(
                "data-skeleton-for",
                block.tag.clone(),
                None,
                false,
            ));
        }
        None => base.push(Attribute::new("class", "skeleton", None, false)),
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}
