use dioxus::prelude::*;
use loading_ui::{AutoSkeleton, LoaderDefaultsProvider};
use serde_json::json;
use skeleton_engine::config::parse_defaults;
use skeleton_types::{
    Attributes, LoaderDefaults, RenderError, TargetNode, WaveDirection, ALL_DIRECTIONS,
};

/// Loader defaults bundled with the binary. Desktop builds read
/// `loading.toml` from the working directory instead.
const EMBEDDED_CONFIG: &str = include_str!("../loading.toml");

fn main() {
    dioxus::launch(App);
}

fn loader_defaults() -> LoaderDefaults {
    if cfg!(feature = "desktop") {
        return skeleton_engine::config::load_defaults(skeleton_engine::config::CONFIG_PATH);
    }
    parse_defaults(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Bundled loader config is invalid; using built-in defaults");
        LoaderDefaults::default()
    })
}

fn stats(attrs: &Attributes) -> Result<TargetNode, RenderError> {
    let count = attrs.get("count").and_then(|v| v.as_u64()).unwrap_or(0);
    let items = (1..=count).map(|n| TargetNode::tagged("li").child(format!("Metric {n}")));
    Ok(TargetNode::tagged("ul")
        .attr("class", "stats")
        .child(TargetNode::list(items)))
}

fn live_chart(_attrs: &Attributes) -> Result<TargetNode, RenderError> {
    Err(RenderError::failed("chart data is fetched after mount"))
}

fn profile_card() -> TargetNode {
    let mut stats_attrs = Attributes::new();
    stats_attrs.insert("count".into(), json!(3));
    let mut chart_attrs = Attributes::new();
    chart_attrs.insert("style".into(), json!({ "width": 320, "height": 160 }));

    TargetNode::tagged("article")
        .attr("class", "profile-card")
        .child(
            TargetNode::tagged("header")
                .child(TargetNode::tagged("img").attr("src", "/avatar.png").attr("alt", "Avatar"))
                .child(TargetNode::tagged("h2").child("Ada Lovelace")),
        )
        .child(TargetNode::tagged("p").child(
            "Mathematician and writer, known for work on the Analytical Engine.",
        ))
        .child(TargetNode::composite("Stats", stats_attrs, stats))
        .child(TargetNode::composite("LiveChart", chart_attrs, live_chart))
        .child(TargetNode::tagged("button").child("Follow"))
}

#[component]
fn App() -> Element {
    let defaults = use_hook(loader_defaults);
    let mut loading = use_signal(|| true);
    let mut direction = use_signal(|| WaveDirection::LeftToRight);
    let card = use_hook(profile_card);

    rsx! {
        LoaderDefaultsProvider { defaults: defaults,
            main {
                h1 { "Auto-skeleton gallery" }
                div { class: "controls",
                    button {
                        onclick: move |_| loading.toggle(),
                        if loading() { "Show content" } else { "Show skeleton" }
                    }
                    select {
                        onchange: move |evt| {
                            if let Ok(next) = evt.value().parse::<WaveDirection>() {
                                direction.set(next);
                            }
                        },
                        for name in ALL_DIRECTIONS.iter().map(|d| d.as_str()) {
                            option { key: "{name}", value: name, "{name}" }
                        }
                    }
                }
                AutoSkeleton {
                    component: card.clone(),
                    loading: loading(),
                    wave_direction: direction(),
                }
                AutoSkeleton {
                    component: card,
                    loading: loading(),
                    inherit_styles: true,
                    shimmer: false,
                    class: "flat",
                    aria_label: "Loading profile (flat)",
                }
            }
        }
    }
}
