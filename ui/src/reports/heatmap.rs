use dioxus::prelude::*;
use serde::Serialize;

use crate::core::grid;
use crate::core::sample::ActivitySample;

const SURFACE_JS: Asset = asset!("/assets/surface.js");
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.32.0.min.js";

/// The exact shape the external surface renderer consumes.
#[derive(Serialize)]
struct SurfaceFigure<'a> {
    x: &'a [String],
    y: &'a [u8],
    z: &'a [Vec<f64>],
    title: &'a str,
}

/// Density surface widget: builds the dense grid from its samples and hands
/// the axis labels plus matrix to the plot shim as a JSON payload.
///
/// `plot_id` must be unique per mounted surface; the shim pairs each plot
/// target with its figure payload through it.
#[component]
pub fn HeatmapSurface(plot_id: String, title: String, samples: Vec<ActivitySample>) -> Element {
    let built = grid::build_grid(&samples);

    // A zero-width grid would make the renderer reject the axis outright;
    // show a placeholder instead of invoking it.
    if built.is_empty() {
        return rsx! {
            div { class: "heatmap-surface heatmap-surface--empty",
                p { class: "heatmap-surface__placeholder",
                    "No activity in this window yet."
                }
            }
        };
    }

    let figure = SurfaceFigure {
        x: &built.day_axis,
        y: &built.hour_axis,
        z: &built.matrix,
        title: &title,
    };
    let payload = match serde_json::to_string(&figure) {
        Ok(json) => json,
        Err(err) => {
            return rsx! {
                div { class: "heatmap-surface heatmap-surface--empty",
                    p { class: "heatmap-surface__placeholder", "Couldn't prepare surface: {err}" }
                }
            };
        }
    };

    rsx! {
        document::Script { src: PLOTLY_CDN }
        document::Script { src: SURFACE_JS }

        div { class: "heatmap-surface",
            script {
                r#type: "application/json",
                id: "{plot_id}-figure",
                "{payload}"
            }
            div {
                id: "{plot_id}",
                class: "heatmap-surface__plot",
                "data-figure": "{plot_id}-figure",
            }
        }
    }
}
