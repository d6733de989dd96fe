//! Sync bookkeeping and local/server conflict resolution for activity rows.

use serde::{Deserialize, Serialize};

use super::rows::{ActivityRow, AttendanceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncState {
    Synced,
    Pending,
}

impl SyncState {
    pub fn label(&self) -> &'static str {
        match self {
            SyncState::Synced => "Synced",
            SyncState::Pending => "Pending",
        }
    }

    /// Lenient parse for form inputs; anything unrecognized stays pending.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Synced" | "synced" => SyncState::Synced,
            _ => SyncState::Pending,
        }
    }
}

/// The fields a conflicting edit can disagree on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub status: AttendanceStatus,
    pub task: String,
    pub time: String,
}

/// Which side of a conflict the user kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChoice {
    Local,
    Server,
}

impl VersionChoice {
    pub fn label(&self) -> &'static str {
        match self {
            VersionChoice::Local => "Local",
            VersionChoice::Server => "Server",
        }
    }
}

/// A diverged row: the locally cached edit next to what the server holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub local: RowSnapshot,
    pub server: RowSnapshot,
}

impl Conflict {
    /// Merge by explicit choice: the kept side's snapshot wins wholesale.
    pub fn resolve(&self, choice: VersionChoice) -> RowSnapshot {
        match choice {
            VersionChoice::Local => self.local.clone(),
            VersionChoice::Server => self.server.clone(),
        }
    }
}

/// Write a resolved snapshot back onto a row and mark it synced.
pub fn apply_snapshot(row: &mut ActivityRow, snapshot: RowSnapshot) {
    row.status = snapshot.status;
    row.task = snapshot.task;
    row.time = snapshot.time;
    row.sync = SyncState::Synced;
}

/// Flip every pending row to synced; returns how many rows changed.
pub fn mark_all_synced(rows: &mut [ActivityRow]) -> usize {
    let mut flipped = 0;
    for row in rows.iter_mut() {
        if row.sync == SyncState::Pending {
            row.sync = SyncState::Synced;
            flipped += 1;
        }
    }
    flipped
}

/// The canned divergence used by the conflict simulation button.
pub fn demo_conflict() -> Conflict {
    Conflict {
        local: RowSnapshot {
            status: AttendanceStatus::Present,
            task: "Project SP".to_string(),
            time: "9:00 AM".to_string(),
        },
        server: RowSnapshot {
            status: AttendanceStatus::Absent,
            task: "-".to_string(),
            time: "9:10 AM".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::rows::seed_rows;

    #[test]
    fn resolution_applies_the_chosen_side() {
        let conflict = demo_conflict();

        let kept_local = conflict.resolve(VersionChoice::Local);
        assert_eq!(kept_local, conflict.local);

        let kept_server = conflict.resolve(VersionChoice::Server);
        assert_eq!(kept_server, conflict.server);
    }

    #[test]
    fn applying_a_snapshot_marks_the_row_synced() {
        let mut row = seed_rows(1).remove(0);
        row.sync = SyncState::Pending;

        let conflict = demo_conflict();
        apply_snapshot(&mut row, conflict.resolve(VersionChoice::Server));

        assert_eq!(row.status, AttendanceStatus::Absent);
        assert_eq!(row.task, "-");
        assert_eq!(row.time, "9:10 AM");
        assert_eq!(row.sync, SyncState::Synced);
    }

    #[test]
    fn mark_all_synced_touches_only_pending_rows() {
        let mut rows = seed_rows(5);
        rows[0].sync = SyncState::Pending;
        rows[1].sync = SyncState::Synced;
        rows[2].sync = SyncState::Pending;
        rows[3].sync = SyncState::Synced;
        rows[4].sync = SyncState::Synced;

        let flipped = mark_all_synced(&mut rows);
        assert_eq!(flipped, 2);
        assert!(rows.iter().all(|row| row.sync == SyncState::Synced));
    }

    #[test]
    fn unknown_sync_labels_parse_as_pending() {
        assert_eq!(SyncState::parse("Synced"), SyncState::Synced);
        assert_eq!(SyncState::parse("weird"), SyncState::Pending);
    }
}
