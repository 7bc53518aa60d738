//! Reminder scheduler: per-tick reminder decisions.
//!
//! # Responsibility
//! - Decide, for one tick, which tasks deserve a user-visible reminder.
//! - Guarantee per-day dedup for pre-due reminders and per-tick dedup for
//!   due reminders.
//!
//! # Invariants
//! - Completed tasks never produce notifications.
//! - A task emits at most one pre-due notification per calendar day.
//! - A task emits at most one due notification per tick boundary, and a
//!   later tick re-fires while the task remains incomplete.
//! - `scan` is deterministic in `(now, tasks, ledger)`; it performs no I/O.

use crate::model::task::{Task, TaskId};
use chrono::{Duration, NaiveDateTime, Timelike};
use log::info;
use std::collections::HashSet;

/// Lead time, in minutes, for the early reminder before a task is due.
pub const PRE_DUE_LEAD_MINUTES: i64 = 30;

/// Which reminder a notification represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Fired inside the lead window before the due moment.
    PreDue,
    /// Fired at or after the due moment while the task is incomplete.
    Due,
}

/// A discrete display event for the notification sink.
///
/// Delivery is best-effort and fire-and-forget; a missed notification is
/// not re-sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub task_id: TaskId,
    pub title: String,
    pub body: String,
}

/// Dedup key for one emitted reminder.
///
/// `Due` carries the tick bucket (minute of day) so re-evaluating the same
/// tick cannot re-fire, while a later tick can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum DedupKey {
    PreDue(TaskId),
    Due(TaskId, u32),
}

/// Transient per-day memory of which reminders already fired.
///
/// Never persisted; cleared by the daily reset policy.
#[derive(Debug, Default)]
pub struct ReminderLedger {
    fired: HashSet<DedupKey>,
}

impl ReminderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets all fired reminders. Called on day rollover.
    pub fn clear(&mut self) {
        self.fired.clear();
    }

    /// Inserts the key, returning whether it was newly inserted.
    fn arm(&mut self, key: DedupKey) -> bool {
        self.fired.insert(key)
    }
}

/// Scans the task list for one tick and returns the notifications to emit.
///
/// Tasks due at the same moment each produce an independent event; their
/// relative order within the returned list is the task list order.
pub fn scan(now: NaiveDateTime, tasks: &[Task], ledger: &mut ReminderLedger) -> Vec<Notification> {
    let mut notifications = Vec::new();
    let tick_bucket = minute_of_day(now);

    for task in tasks {
        if task.completed {
            continue;
        }

        let task_moment = now.date().and_time(task.time);
        let pre_window_start = task_moment - Duration::minutes(PRE_DUE_LEAD_MINUTES);

        if now >= pre_window_start && now < task_moment {
            if ledger.arm(DedupKey::PreDue(task.id)) {
                notifications.push(pre_due_notification(task, task_moment, now));
            }
        } else if now >= task_moment && ledger.arm(DedupKey::Due(task.id, tick_bucket)) {
            notifications.push(due_notification(task));
        }
    }

    for notification in &notifications {
        info!(
            "event=reminder_emit module=reminder kind={:?} task_id={}",
            notification.kind, notification.task_id
        );
    }

    notifications
}

fn minute_of_day(now: NaiveDateTime) -> u32 {
    now.time().hour() * 60 + now.time().minute()
}

fn pre_due_notification(task: &Task, task_moment: NaiveDateTime, now: NaiveDateTime) -> Notification {
    let minutes_left = (task_moment - now).num_minutes().max(1);
    Notification {
        kind: NotificationKind::PreDue,
        task_id: task.id,
        title: task.title.clone(),
        body: format!("Due at {} (in {} min)", task.wire_time(), minutes_left),
    }
}

fn due_notification(task: &Task) -> Notification {
    Notification {
        kind: NotificationKind::Due,
        task_id: task.id,
        title: task.title.clone(),
        body: format!("Due now ({})", task.wire_time()),
    }
}
