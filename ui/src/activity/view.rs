use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use crate::core::timing::{self, FEEDBACK_VISIBLE_MS};
use crate::core::{format, platform};

use super::rows::{self, ActivityRow, EditField};
use super::sync::{self, Conflict, SyncState, VersionChoice};

/// Events handled by the editor's coroutine: feedback banners plus their
/// delayed dismissal. The stamp guards against an old timer clearing a
/// newer banner.
#[derive(Debug, Clone)]
enum ActivityEvent {
    Notify(String),
    Dismiss { stamp: u64 },
}

/// Editable activity log: cached rows, inline edit mode, sync bookkeeping,
/// and the simulated local/server conflict flow.
#[component]
pub fn ActivityEditor() -> Element {
    let mut rows = use_signal(|| match rows::load_cached_rows() {
        Ok(Some(cached)) => cached,
        _ => {
            let seeded = rows::seed_rows(6);
            let _ = rows::cache_rows(&seeded);
            seeded
        }
    });
    let mut edit_mode = use_signal(|| false);
    let mut conflict = use_signal(|| Option::<Conflict>::None);
    let feedback = use_signal(|| Option::<String>::None);

    let sender_slot: Rc<RefCell<Option<UnboundedSender<ActivityEvent>>>> =
        Rc::new(RefCell::new(None));
    let sender_slot_for_loop = sender_slot.clone();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<ActivityEvent>| {
        let sender_slot = sender_slot_for_loop.clone();
        let mut feedback_signal = feedback;

        async move {
            let mut current_stamp: u64 = 0;
            while let Some(event) = rx.next().await {
                match event {
                    ActivityEvent::Notify(message) => {
                        current_stamp += 1;
                        feedback_signal.set(Some(message));
                        queue_dismiss(sender_slot.clone(), current_stamp);
                    }
                    ActivityEvent::Dismiss { stamp } => {
                        if stamp == current_stamp {
                            feedback_signal.set(None);
                        }
                    }
                }
            }
        }
    });

    sender_slot.borrow_mut().replace(coroutine.tx());

    let notify = move |message: String| {
        coroutine.send(ActivityEvent::Notify(message));
    };

    let persist = move |rows_now: &[ActivityRow]| match rows::cache_rows(rows_now) {
        Ok(()) => None,
        Err(err) => Some(format!("Couldn't cache rows: {err}")),
    };

    let toggle_edit = move |_| {
        let entering = !edit_mode();
        edit_mode.set(entering);
        notify(if entering {
            "Edit mode enabled".to_string()
        } else {
            "Exited edit mode".to_string()
        });
    };

    let save_all = move |_| {
        let message = persist(&rows()).unwrap_or_else(|| "All changes saved".to_string());
        notify(message);
    };

    let sync_pending = move |_| {
        let flipped = rows.with_mut(|rows| sync::mark_all_synced(rows));
        if let Some(err) = persist(&rows()) {
            notify(err);
        } else {
            notify(format!("{flipped} pending rows synced"));
        }
    };

    let simulate_conflict = move |_| {
        conflict.set(Some(sync::demo_conflict()));
    };

    let reseed = move |_| {
        let fresh = rows::seed_rows(6);
        let message = persist(&fresh).unwrap_or_else(|| "New data synced".to_string());
        rows.set(fresh);
        conflict.set(None);
        notify(message);
    };

    let mut resolve_conflict = move |choice: VersionChoice| {
        if let Some(active) = conflict() {
            let snapshot = active.resolve(choice);
            rows.with_mut(|rows| {
                if let Some(first) = rows.first_mut() {
                    sync::apply_snapshot(first, snapshot);
                }
            });
            conflict.set(None);
            let message = persist(&rows())
                .unwrap_or_else(|| format!("Resolved using {} version", choice.label()));
            notify(message);
        }
    };

    let editing = edit_mode();
    let feedback_message = feedback();
    let active_conflict = conflict();

    rsx! {
        section { class: "activity-card",
            div { class: "activity-card__header",
                h2 { "Event sync log" }
                span { class: "activity-card__meta", "{rows().len()} rows cached locally" }
            }

            if let Some(message) = feedback_message {
                div { class: "activity-feedback", "{message}" }
            }

            table { class: "activity-table",
                thead {
                    tr {
                        th { "Date" }
                        th { "Status" }
                        th { "Time" }
                        th { "Task" }
                        th { "Sync state" }
                    }
                }
                tbody {
                    for (index, row) in rows().into_iter().enumerate() {
                        {render_row(index, row, editing, rows)}
                    }
                }
            }

            div { class: "activity-actions",
                button {
                    r#type: "button",
                    class: "button",
                    onclick: toggle_edit,
                    if editing { "View mode" } else { "Edit mode" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: sync_pending,
                    "Sync now"
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: simulate_conflict,
                    "Simulate conflict"
                }
                button {
                    r#type: "button",
                    class: "button button--accent",
                    onclick: reseed,
                    "Sync new data"
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !editing,
                    onclick: save_all,
                    "Save all"
                }
            }

            if let Some(active) = active_conflict {
                div { class: "activity-conflict",
                    h3 { "Sync conflict detected" }
                    table { class: "activity-table",
                        thead {
                            tr {
                                th { "Version" }
                                th { "Check-in" }
                                th { "Task" }
                                th { "Updated at" }
                            }
                        }
                        tbody {
                            tr {
                                td { strong { "Local" } }
                                td { "{active.local.status.label()}" }
                                td { "{active.local.task}" }
                                td { "{active.local.time}" }
                            }
                            tr {
                                td { strong { "Server" } }
                                td { "{active.server.status.label()}" }
                                td { "{active.server.task}" }
                                td { "{active.server.time}" }
                            }
                        }
                    }
                    div { class: "activity-conflict__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            onclick: move |_| resolve_conflict(VersionChoice::Local),
                            "Keep local"
                        }
                        button {
                            r#type: "button",
                            class: "button",
                            onclick: move |_| resolve_conflict(VersionChoice::Server),
                            "Keep server"
                        }
                    }
                }
            }
        }
    }
}

fn queue_dismiss(sender_slot: Rc<RefCell<Option<UnboundedSender<ActivityEvent>>>>, stamp: u64) {
    if let Some(sender) = sender_slot.borrow().as_ref().cloned() {
        platform::spawn_future(async move {
            timing::sleep_ms(FEEDBACK_VISIBLE_MS).await;
            let _ = sender.unbounded_send(ActivityEvent::Dismiss { stamp });
        });
    }
}

fn render_row(
    index: usize,
    row: ActivityRow,
    editing: bool,
    mut rows: Signal<Vec<ActivityRow>>,
) -> Element {
    let date_label = format::format_day_label(&row.date);
    let sync_class = match row.sync {
        SyncState::Pending => "activity-sync activity-sync--pending",
        SyncState::Synced => "activity-sync activity-sync--synced",
    };

    rsx! {
        tr { key: "{row.id}",
            td { "{date_label}" }
            td { class: "activity-table__status", "{row.status.label()}" }

            td {
                if editing {
                    input {
                        r#type: "text",
                        class: "activity-table__input",
                        value: "{row.time}",
                        oninput: move |evt| {
                            rows.with_mut(|rows| {
                                rows[index].apply_edit(EditField::Time, &evt.value());
                            });
                        },
                    }
                } else {
                    "{row.time}"
                }
            }

            td {
                if editing {
                    input {
                        r#type: "text",
                        class: "activity-table__input",
                        value: "{row.task}",
                        oninput: move |evt| {
                            rows.with_mut(|rows| {
                                rows[index].apply_edit(EditField::Task, &evt.value());
                            });
                        },
                    }
                } else {
                    "{row.task}"
                }
            }

            td {
                if editing {
                    select {
                        class: "activity-table__input",
                        value: "{row.sync.label()}",
                        oninput: move |evt| {
                            rows.with_mut(|rows| {
                                rows[index].apply_edit(EditField::Sync, &evt.value());
                            });
                        },
                        option { value: "Synced", "Synced" }
                        option { value: "Pending", "Pending" }
                    }
                } else {
                    span { class: "{sync_class}", "{row.sync.label()}" }
                }
            }
        }
    }
}
