//! Activity-log rows and the demo seeding used until a real backend sync.

use rand::Rng;
use serde::{Deserialize, Serialize};
use time::{macros::format_description, Duration, OffsetDateTime};
use uuid::Uuid;

use crate::core::storage;

use super::sync::SyncState;

/// Cache key for the editable rows (survives reloads on every platform).
pub const ROWS_STORAGE_KEY: &str = "pulsegrid.activity.rows";

const TASK_OPTIONS: &[&str] = &[
    "UI Fixes",
    "Review PR",
    "Bug Triage",
    "Project SP",
    "API Integration",
    "Code Review",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

/// One editable log row. `date` is ISO; views render it through
/// `core::format::format_day_label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub id: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub time: String,
    pub task: String,
    pub sync: SyncState,
}

/// The inline-editable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Time,
    Task,
    Sync,
}

impl ActivityRow {
    pub fn apply_edit(&mut self, field: EditField, value: &str) {
        match field {
            EditField::Time => self.time = value.to_string(),
            EditField::Task => self.task = value.to_string(),
            EditField::Sync => self.sync = SyncState::parse(value),
        }
    }
}

/// Seed demo rows: one per day counting back from today, mostly present,
/// mostly synced, with a morning check-in time.
pub fn seed_rows(count: usize) -> Vec<ActivityRow> {
    let mut rng = rand::thread_rng();
    let today = OffsetDateTime::now_utc().date();

    (0..count)
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let present = rng.gen_bool(0.8);
            let (time, task) = if present {
                let hour = 8 + rng.gen_range(0..3u8);
                let minute = rng.gen_range(0..60u8);
                let task = TASK_OPTIONS[rng.gen_range(0..TASK_OPTIONS.len())];
                (format!("{hour}:{minute:02} AM"), task.to_string())
            } else {
                ("-".to_string(), "-".to_string())
            };

            ActivityRow {
                id: Uuid::new_v4().to_string(),
                date: format_iso(date),
                status: if present {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                },
                time,
                task,
                sync: if rng.gen_bool(0.7) {
                    SyncState::Synced
                } else {
                    SyncState::Pending
                },
            }
        })
        .collect()
}

pub fn load_cached_rows() -> Result<Option<Vec<ActivityRow>>, String> {
    storage::load_value(ROWS_STORAGE_KEY)
}

pub fn cache_rows(rows: &[ActivityRow]) -> Result<(), String> {
    storage::store_value(ROWS_STORAGE_KEY, &rows)
}

fn format_iso(date: time::Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
