//! Sample shapes and normalization for the density grid.

use serde::{Deserialize, Serialize};

/// One observation of task volume: which day, which hour bucket, how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySample {
    pub day: String,
    /// Hour-of-day bucket in `0..=23`.
    pub hour: u8,
    pub value: f64,
}

/// A raw per-date aggregate as it arrives from the reporting API, with every
/// optional field explicit. Malformed rows are handled here, at the
/// normalization boundary, rather than deep inside grid construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReportRecord {
    pub date: Option<String>,
    pub tasks: Option<f64>,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub contents: Vec<String>,
}

impl RawReportRecord {
    pub fn new(date: impl Into<String>, tasks: f64) -> Self {
        Self {
            date: Some(date.into()),
            tasks: Some(tasks),
            ..Self::default()
        }
    }
}

/// Map raw per-date aggregates into grid samples.
///
/// The reporting API only aggregates per date, so there is no wall-clock hour
/// to recover: the `hour` bucket is the record's position in the fetch order,
/// modulo 24. Re-sorting the input therefore moves samples between hour rows.
/// That is a presentation artifact of the aggregate feed, kept deterministic
/// here; sources that know real hours ship `(day, hour, value)` points
/// directly and skip this function.
///
/// A record without a usable date is dropped (it cannot label a day column);
/// a missing task count defaults to `0`.
pub fn normalize_records(records: &[RawReportRecord]) -> Vec<ActivitySample> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let day = record.date.as_deref()?.trim();
            if day.is_empty() {
                return None;
            }
            Some(ActivitySample {
                day: day.to_string(),
                hour: (index % 24) as u8,
                value: record.tasks.unwrap_or(0.0),
            })
        })
        .collect()
}

/// Collapse duplicate `(day, hour)` coordinates, keeping the last occurrence.
///
/// Sources that can emit duplicates (pre-computed point lists) are expected
/// to run through this before a grid build; the grid itself resolves any
/// remaining duplicates first-match. Relative order of the survivors is
/// preserved.
pub fn dedup_last_wins(samples: Vec<ActivitySample>) -> Vec<ActivitySample> {
    let mut deduped: Vec<ActivitySample> = Vec::with_capacity(samples.len());
    for sample in samples {
        if let Some(existing) = deduped
            .iter_mut()
            .find(|s| s.day == sample.day && s.hour == sample.hour)
        {
            existing.value = sample.value;
        } else {
            deduped.push(sample);
        }
    }
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_follows_position_and_wraps() {
        let records: Vec<RawReportRecord> = (0..26)
            .map(|i| RawReportRecord::new(format!("2024-01-{:02}", i + 1), 1.0))
            .collect();
        let samples = normalize_records(&records);

        assert_eq!(samples.len(), 26);
        assert_eq!(samples[0].hour, 0);
        assert_eq!(samples[23].hour, 23);
        assert_eq!(samples[24].hour, 0);
        assert_eq!(samples[25].hour, 1);
    }

    #[test]
    fn missing_count_defaults_to_zero() {
        let record = RawReportRecord {
            date: Some("2024-01-01".to_string()),
            tasks: None,
            ..RawReportRecord::default()
        };
        let samples = normalize_records(&[record]);
        assert_eq!(samples[0].value, 0.0);
    }

    #[test]
    fn dateless_records_are_dropped() {
        let records = vec![
            RawReportRecord::new("2024-01-01", 2.0),
            RawReportRecord {
                date: None,
                tasks: Some(4.0),
                ..RawReportRecord::default()
            },
            RawReportRecord {
                date: Some("   ".to_string()),
                tasks: Some(4.0),
                ..RawReportRecord::default()
            },
        ];
        let samples = normalize_records(&records);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].day, "2024-01-01");
    }

    #[test]
    fn dropped_records_still_advance_the_position() {
        // The hour bucket tracks fetch position, not survivor position.
        let records = vec![
            RawReportRecord {
                date: None,
                tasks: Some(1.0),
                ..RawReportRecord::default()
            },
            RawReportRecord::new("2024-01-02", 2.0),
        ];
        let samples = normalize_records(&records);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].hour, 1);
    }

    #[test]
    fn dedup_keeps_the_last_duplicate() {
        let samples = vec![
            ActivitySample {
                day: "2024-01-01".into(),
                hour: 5,
                value: 2.0,
            },
            ActivitySample {
                day: "2024-01-02".into(),
                hour: 5,
                value: 9.0,
            },
            ActivitySample {
                day: "2024-01-01".into(),
                hour: 5,
                value: 7.0,
            },
        ];
        let deduped = dedup_last_wins(samples);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].value, 7.0);
        assert_eq!(deduped[1].value, 9.0);
    }
}
