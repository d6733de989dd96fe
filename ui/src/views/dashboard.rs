use dioxus::prelude::*;

use api::ReportQuery;
use time::{macros::format_description, Duration, OffsetDateTime};

use crate::reports::{aggregate_samples, point_samples, HeatmapSurface};

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "page page-dashboard",
            h1 { "Dashboard" }
            p { "Task density across the team, hour by hour." }

            div { class: "dashboard__cards",
                UserHeatmapCard {}
                AdminHeatmapCard {}
            }
        }
    }
}

/// Personal activity surface over a rolling window ending today. The
/// reports endpoint only aggregates per date, so these samples go through
/// the positional normalizer.
#[component]
fn UserHeatmapCard() -> Element {
    let response = use_resource(|| async move { api::fetch_reports(rolling_window(5)).await });

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "My activity" }
                span { class: "dashboard-card__meta", "Last 5 days" }
            }

            match &*response.read() {
                Some(Ok(report)) => rsx! {
                    HeatmapSurface {
                        plot_id: "user-heatmap",
                        title: "Task density",
                        samples: aggregate_samples(report),
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "dashboard-card__error", "Couldn't load activity: {err}" }
                },
                None => rsx! {
                    p { class: "dashboard-card__placeholder", "Loading activity…" }
                },
            }
        }
    }
}

/// Group-scoped surface with a selectable day range. The admin endpoint
/// serves pre-computed `(day, hour, value)` points, so no normalization
/// happens here.
#[component]
fn AdminHeatmapCard() -> Element {
    let mut range = use_signal(|| 3u32);
    let mut selected_group = use_signal(String::new);

    let groups = use_resource(|| async move { api::fetch_groups().await });
    let points = use_resource(move || {
        let days = range();
        let group = selected_group();
        async move {
            let query = ReportQuery {
                days: Some(days),
                group: (!group.is_empty()).then_some(group),
                ..ReportQuery::default()
            };
            api::fetch_heatmap(query).await
        }
    });

    let group_options = match &*groups.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        section { class: "dashboard-card",
            div { class: "dashboard-card__header",
                h2 { "Team activity" }
                div { class: "dashboard-card__controls",
                    select {
                        value: "{range()}",
                        oninput: move |evt| {
                            range.set(evt.value().parse().unwrap_or(3));
                        },
                        option { value: "3", "Last 3 days" }
                        option { value: "5", "Last 5 days" }
                        option { value: "7", "Last 7 days" }
                    }
                    select {
                        value: "{selected_group()}",
                        oninput: move |evt| selected_group.set(evt.value()),
                        option { value: "", "All Groups" }
                        for group in group_options.iter() {
                            option {
                                key: "{group.group_name}",
                                value: "{group.group_name}",
                                "{group.group_name}"
                            }
                        }
                    }
                }
            }

            match &*points.read() {
                Some(Ok(list)) => rsx! {
                    HeatmapSurface {
                        plot_id: "admin-heatmap",
                        title: "Team task density",
                        samples: point_samples(list),
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "dashboard-card__error", "Couldn't load heatmap: {err}" }
                },
                None => rsx! {
                    p { class: "dashboard-card__placeholder", "Loading heatmap…" }
                },
            }
        }
    }
}

fn rolling_window(days: i64) -> ReportQuery {
    let end = OffsetDateTime::now_utc().date();
    let start = end - Duration::days(days - 1);
    ReportQuery {
        start: Some(iso_date(start)),
        end: Some(iso_date(end)),
        ..ReportQuery::default()
    }
}

fn iso_date(date: time::Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
