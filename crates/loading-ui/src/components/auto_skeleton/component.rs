use crate::render::{keyed, SkeletonView, TargetView};
use dioxus::prelude::*;
use skeleton_engine::{transform, SynthesisContext, Transformed};
use skeleton_types::{
    class_names, AutoSkeletonOptions, CssLength, LoaderDefaults, StyleOverrides, TargetNode,
    WaveDirection,
};

#[derive(Props, Clone, PartialEq)]
pub struct AutoSkeletonProps {
    /// The tree shown once loading finishes, and mirrored while it runs.
    pub component: TargetNode,
    #[props(default = true)]
    pub loading: bool,
    #[props(default)]
    pub inherit_styles: Option<bool>,
    /// Per-tag overrides, layered over the provided defaults.
    #[props(default)]
    pub styles: StyleOverrides,
    #[props(default)]
    pub shimmer: Option<bool>,
    #[props(default)]
    pub color: Option<String>,
    #[props(default)]
    pub highlight_color: Option<String>,
    #[props(default)]
    pub shimmer_color: Option<String>,
    #[props(default)]
    pub wave_width: Option<String>,
    #[props(default)]
    pub wave_direction: Option<WaveDirection>,
    #[props(default)]
    pub speed: Option<f64>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub style: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
}

impl AutoSkeletonProps {
    fn options(&self) -> AutoSkeletonOptions {
        AutoSkeletonOptions {
            inherit_styles: self.inherit_styles,
            shimmer: self.shimmer,
            color: self.color.clone(),
            highlight_color: self.highlight_color.clone(),
            shimmer_color: self.shimmer_color.clone(),
            wave_width: self.wave_width.as_deref().and_then(CssLength::parse),
            wave_direction: self.wave_direction,
            speed: self.speed,
            aria_label: self.aria_label.clone(),
            styles: self.styles.clone(),
        }
    }
}

/// Shows `component` when ready and a structurally matching skeleton while
/// `loading` is true.
#[component]
pub fn AutoSkeleton(props: AutoSkeletonProps) -> Element {
    let defaults = try_use_context::<LoaderDefaults>().unwrap_or_default();
    let resolved = props.options().resolve(&defaults);
    let ctx = SynthesisContext::from_defaults(&resolved);

    let class = class_names([Some("auto-skeleton"), props.class.as_deref()]);
    let busy = props.loading.to_string();
    let aria_label = resolved.aria_label;

    let body = match transform(&props.component, props.loading, &ctx) {
        Transformed::Passthrough(tree) => rsx! {
            TargetView { node: tree.clone() }
        },
        Transformed::Skeleton(nodes) => rsx! {
            for (key, node) in keyed(&nodes) {
                SkeletonView { key: "{key}", node: node }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "{class}",
            style: props.style.clone(),
            role: "status",
            aria_live: "polite",
            aria_busy: "{busy}",
            aria_label: "{aria_label}",
            {body}
        }
    }
}

/// Provides library-wide `AutoSkeleton` defaults to everything below it.
#[component]
pub fn LoaderDefaultsProvider(defaults: LoaderDefaults, children: Element) -> Element {
    use_context_provider(|| defaults);
    rsx! {
        {children}
    }
}
