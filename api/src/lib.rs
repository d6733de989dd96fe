//! Reporting API surface for Pulsegrid.
//!
//! Wire types mirror the reporting endpoints the dashboard consumes:
//! per-date aggregates keyed by ISO date, an optional pre-computed heatmap
//! point list, the group directory, and the report-generation trigger.
//! The server functions here serve deterministic demo aggregates so every
//! platform target can run without a live backend.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use time::{macros::format_description, Duration, OffsetDateTime};

/// Query parameters accepted by the reporting endpoints.
///
/// `start`/`end` bound the window with ISO dates (inclusive); `days` is the
/// rolling-window alternative used by the admin dashboard card. When both are
/// present the explicit range wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub group: Option<String>,
    pub days: Option<u32>,
}

/// One day's aggregate as served by the reports endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
    pub tasks: f64,
    pub hours: f64,
    pub contents: Vec<String>,
}

/// A pre-computed density sample: the backend already resolved the
/// wall-clock hour for these, so they feed the surface widget directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPoint {
    pub day: String,
    pub hour: u8,
    pub value: f64,
}

/// Response body of the reports endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    pub data: BTreeMap<String, DayReport>,
    #[serde(default)]
    pub heatmap: Vec<HeatmapPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupInfo {
    pub group_name: String,
}

const GROUPS: &[&str] = &["Platform", "Field Ops", "Support"];

const TASK_POOL: &[&str] = &[
    "UI Fixes",
    "Review PR",
    "Bug Triage",
    "API Integration",
    "Code Review",
    "Planning",
];

/// Fetch per-date aggregates for the requested window.
#[server]
pub async fn fetch_reports(query: ReportQuery) -> Result<ReportResponse, ServerFnError> {
    Ok(build_report(&query))
}

/// Fetch pre-computed `(day, hour, value)` density points for the window.
#[server]
pub async fn fetch_heatmap(query: ReportQuery) -> Result<Vec<HeatmapPoint>, ServerFnError> {
    Ok(build_heatmap(&query))
}

/// List the groups the caller may scope reports to.
#[server]
pub async fn fetch_groups() -> Result<Vec<GroupInfo>, ServerFnError> {
    Ok(GROUPS
        .iter()
        .map(|name| GroupInfo {
            group_name: (*name).to_string(),
        })
        .collect())
}

/// Trigger report generation; the reply carries the artifact URL once ready.
#[server]
pub async fn generate_report(query: ReportQuery) -> Result<String, ServerFnError> {
    let (start, end) = resolve_window(&query);
    let group = query.group.as_deref().unwrap_or("all");
    Ok(format!(
        "Report ready: https://files.pulsegrid.dev/reports/task_report_{group}_{start}_{end}.pdf"
    ))
}

/// Materialize the demo aggregates for a query window.
pub fn build_report(query: &ReportQuery) -> ReportResponse {
    let mut data = BTreeMap::new();
    for date in window_dates(query) {
        data.insert(date.clone(), day_report(&date, query.group.as_deref()));
    }
    let heatmap = build_heatmap(query);
    ReportResponse { data, heatmap }
}

/// Materialize demo density points for a query window.
pub fn build_heatmap(query: &ReportQuery) -> Vec<HeatmapPoint> {
    let mut points = Vec::new();
    for date in window_dates(query) {
        let seed = fold_seed(&date, query.group.as_deref());
        // Three busy hours per day keeps the surface recognizably sparse.
        for slot in 0..3u64 {
            let hour = ((seed >> (slot * 5)) % 24) as u8;
            let value = 1.0 + ((seed >> (slot * 7)) % 6) as f64;
            points.push(HeatmapPoint {
                day: date.clone(),
                hour,
                value,
            });
        }
    }
    points
}

fn day_report(date: &str, group: Option<&str>) -> DayReport {
    let seed = fold_seed(date, group);
    let tasks = 2.0 + (seed % 9) as f64;
    let hours = 4.0 + (seed % 5) as f64;
    let mut contents = Vec::new();
    for slot in 0..2usize {
        let idx = ((seed >> (slot * 11)) % TASK_POOL.len() as u64) as usize;
        let entry = TASK_POOL[idx].to_string();
        if !contents.contains(&entry) {
            contents.push(entry);
        }
    }
    DayReport {
        tasks,
        hours,
        contents,
    }
}

/// Stable per-day seed so repeated fetches agree (FNV-1a over date + group).
fn fold_seed(date: &str, group: Option<&str>) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in date.bytes().chain(group.unwrap_or("").bytes()) {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Resolve the query window to concrete inclusive ISO bounds.
fn resolve_window(query: &ReportQuery) -> (String, String) {
    let today = OffsetDateTime::now_utc().date();
    let end = query
        .end
        .as_deref()
        .and_then(parse_iso_date)
        .unwrap_or(today);
    let start = query.start.as_deref().and_then(parse_iso_date).unwrap_or({
        let span = query.days.unwrap_or(3).max(1) as i64;
        end - Duration::days(span - 1)
    });
    (format_iso_date(start), format_iso_date(end))
}

fn window_dates(query: &ReportQuery) -> Vec<String> {
    let (start, end) = resolve_window(query);
    let (Some(mut cursor), Some(end)) = (parse_iso_date(&start), parse_iso_date(&end)) else {
        return Vec::new();
    };
    let mut dates = Vec::new();
    // Hard cap so a malformed range can't balloon the response.
    while cursor <= end && dates.len() < 92 {
        dates.push(format_iso_date(cursor));
        cursor = match cursor.next_day() {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

fn parse_iso_date(raw: &str) -> Option<time::Date> {
    time::Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()
}

fn format_iso_date(date: time::Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: &str, end: &str) -> ReportQuery {
        ReportQuery {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            ..ReportQuery::default()
        }
    }

    #[test]
    fn report_covers_every_day_in_window() {
        let response = build_report(&window("2024-01-01", "2024-01-05"));
        assert_eq!(response.data.len(), 5);
        assert!(response.data.contains_key("2024-01-01"));
        assert!(response.data.contains_key("2024-01-05"));
    }

    #[test]
    fn aggregates_are_deterministic() {
        let query = window("2024-03-10", "2024-03-12");
        assert_eq!(build_report(&query), build_report(&query));
    }

    #[test]
    fn group_scoping_changes_the_aggregates() {
        let all = build_report(&window("2024-03-10", "2024-03-12"));
        let mut scoped_query = window("2024-03-10", "2024-03-12");
        scoped_query.group = Some("Platform".to_string());
        let scoped = build_report(&scoped_query);
        assert_ne!(all, scoped);
    }

    #[test]
    fn heatmap_hours_stay_in_range() {
        let points = build_heatmap(&window("2024-01-01", "2024-01-07"));
        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.hour < 24));
        assert!(points.iter().all(|p| p.value > 0.0));
    }

    #[test]
    fn inverted_window_yields_no_days() {
        let response = build_report(&window("2024-01-05", "2024-01-01"));
        assert!(response.data.is_empty());
    }
}
