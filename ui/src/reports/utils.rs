use api::ReportResponse;

use crate::core::sample::{self, ActivitySample, RawReportRecord};

/// One tabular report row as the reports page and the exporters consume it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRow {
    pub date: String,
    pub tasks: f64,
    pub hours: f64,
    pub contents: String,
}

/// Flatten the per-date aggregate map into display rows. `BTreeMap`
/// iteration already yields dates ascending.
pub(crate) fn report_rows(response: &ReportResponse) -> Vec<ReportRow> {
    response
        .data
        .iter()
        .map(|(date, day)| ReportRow {
            date: date.clone(),
            tasks: day.tasks,
            hours: day.hours,
            contents: day.contents.join(", "),
        })
        .collect()
}

/// Derive grid samples from a report response. Pre-computed heatmap points
/// win when the backend sent them; otherwise the per-date aggregates run
/// through the positional normalizer.
pub(crate) fn heat_samples(response: &ReportResponse) -> Vec<ActivitySample> {
    if !response.heatmap.is_empty() {
        point_samples(&response.heatmap)
    } else {
        aggregate_samples(response)
    }
}

/// Normalizer path: per-date aggregates carry no wall-clock hour, so the
/// positional rule assigns the bucket.
pub(crate) fn aggregate_samples(response: &ReportResponse) -> Vec<ActivitySample> {
    let records: Vec<RawReportRecord> = response
        .data
        .iter()
        .map(|(date, day)| RawReportRecord {
            date: Some(date.clone()),
            tasks: Some(day.tasks),
            hours: Some(day.hours),
            contents: day.contents.clone(),
        })
        .collect();
    sample::normalize_records(&records)
}

/// Pre-computed path: points already carry real hours. Deduplicated
/// last-wins, since point lists may repeat a coordinate across pages.
pub(crate) fn point_samples(points: &[api::HeatmapPoint]) -> Vec<ActivitySample> {
    let samples = points
        .iter()
        .map(|p| ActivitySample {
            day: p.day.clone(),
            hour: p.hour % 24,
            value: p.value,
        })
        .collect();
    sample::dedup_last_wins(samples)
}
