use dioxus::prelude::*;

use crate::core::format;

use super::ReportRow;

/// Per-day aggregate cards under the reports surface.
#[component]
pub fn ReportDayCards(rows: Vec<ReportRow>) -> Element {
    rsx! {
        section { class: "report-cards",
            if rows.is_empty() {
                p { class: "report-cards__placeholder",
                    "Apply a date window to load report data."
                }
            } else {
                div { class: "report-cards__grid",
                    for row in rows.iter() {
                        div { key: "{row.date}", class: "report-card",
                            h4 { class: "report-card__date", "{format::format_day_label(&row.date)}" }
                            p {
                                span { class: "report-card__label", "Tasks: " }
                                "{format::format_count(row.tasks)}"
                            }
                            p {
                                span { class: "report-card__label", "Hours: " }
                                "{format::format_hours(row.hours)}"
                            }
                            p {
                                span { class: "report-card__label", "Contents: " }
                                "{row.contents}"
                            }
                        }
                    }
                }
            }
        }
    }
}
