use dioxus::prelude::*;

use api::ReportQuery;

use crate::reports::{HeatmapSurface, ReportDayCards, ReportsData, ReportsExportPanel};

#[component]
pub fn Reports() -> Element {
    let mut team = use_signal(String::new);
    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut applied = use_signal(ReportQuery::default);
    let mut report_link = use_signal(|| Option::<String>::None);

    let groups = use_resource(|| async move { api::fetch_groups().await });
    let response = use_resource(move || {
        let query = applied();
        async move { api::fetch_reports(query).await }
    });

    let apply = move |_| {
        applied.set(build_query(&from(), &to(), &team()));
    };

    let generate_pdf = move |_| {
        let query = applied();
        spawn(async move {
            match api::generate_report(query).await {
                Ok(message) => report_link.set(Some(message)),
                Err(err) => report_link.set(Some(format!("Report generation failed: {err}"))),
            }
        });
    };

    let group_options = match &*groups.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };

    rsx! {
        section { class: "page page-reports",
            h1 { "My reports" }

            div { class: "report-controls",
                select {
                    value: "{team()}",
                    oninput: move |evt| team.set(evt.value()),
                    option { value: "", "All Groups" }
                    for group in group_options.iter() {
                        option {
                            key: "{group.group_name}",
                            value: "{group.group_name}",
                            "{group.group_name}"
                        }
                    }
                }
                input {
                    r#type: "date",
                    value: "{from()}",
                    oninput: move |evt| from.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: "{to()}",
                    oninput: move |evt| to.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: apply,
                    "Apply"
                }
            }

            match &*response.read() {
                Some(Ok(report)) => {
                    let data = ReportsData::from_response(report);
                    rsx! {
                        if data.is_empty() {
                            p { class: "page-reports__placeholder",
                                "No report data in this window."
                            }
                        } else {
                            HeatmapSurface {
                                plot_id: "reports-heatmap",
                                title: "Task density",
                                samples: data.samples.clone(),
                            }
                            ReportDayCards { rows: data.rows.clone() }
                            ReportsExportPanel { rows: data.rows.clone() }

                            div { class: "report-pdf",
                                button {
                                    r#type: "button",
                                    class: "button button--ghost",
                                    onclick: generate_pdf,
                                    "Generate PDF"
                                }
                                if let Some(message) = report_link() {
                                    {render_report_link(&message)}
                                }
                            }
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    p { class: "page-reports__error", "Error fetching reports: {err}" }
                },
                None => rsx! {
                    p { class: "page-reports__placeholder", "Loading…" }
                },
            }
        }
    }
}

fn build_query(from: &str, to: &str, team: &str) -> ReportQuery {
    ReportQuery {
        start: (!from.is_empty()).then(|| from.to_string()),
        end: (!to.is_empty()).then(|| to.to_string()),
        group: (!team.is_empty()).then(|| team.to_string()),
        days: None,
    }
}

/// The generation reply is a plain message; link it when it carries a URL.
fn render_report_link(message: &str) -> Element {
    match message.split("http").nth(1) {
        Some(rest) => {
            let url = format!("http{rest}");
            rsx! {
                a {
                    class: "report-pdf__link",
                    href: "{url}",
                    target: "_blank",
                    "Download PDF"
                }
            }
        }
        None => rsx! {
            span { class: "report-pdf__status", "{message}" }
        },
    }
}
