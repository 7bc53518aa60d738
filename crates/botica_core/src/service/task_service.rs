//! Supervisor checklist use-case service.
//!
//! # Responsibility
//! - Own the task repository, the reset policy and the reminder ledger for
//!   one application session.
//! - Expose the CRUD surface called by presentation layers.
//! - Run one scheduler tick to completion: reset check, then reminder scan.
//!
//! # Invariants
//! - All shared state is mutated only through this service; ticks and CRUD
//!   calls never interleave (single-threaded, run-to-completion).
//! - Service APIs never bypass repository validation/persistence contracts.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::service::daily_reset::DailyReset;
use crate::service::reminder::{scan, Notification, ReminderLedger};
use chrono::NaiveDateTime;
use log::info;

/// Session-owned facade over the checklist core.
pub struct TaskService<'conn, R: TaskRepository> {
    repo: R,
    reset: DailyReset<'conn>,
    ledger: ReminderLedger,
}

impl<'conn, R: TaskRepository> TaskService<'conn, R> {
    /// Creates a service from an already-loaded repository.
    pub fn new(repo: R, reset: DailyReset<'conn>) -> Self {
        Self {
            repo,
            reset,
            ledger: ReminderLedger::new(),
        }
    }

    /// Read access to the live task list, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        self.repo.tasks()
    }

    /// Creates a task from dialog input. Validation errors decline the
    /// operation with no state change.
    pub fn create(&mut self, title: &str, time: &str) -> RepoResult<TaskId> {
        let id = self.repo.create(title, time)?;
        info!("event=task_create module=service task_id={id}");
        Ok(id)
    }

    /// Edits a task in place. Unknown ids are a silent no-op (`false`).
    pub fn update(&mut self, id: TaskId, title: &str, time: &str) -> RepoResult<bool> {
        self.repo.update(id, title, time)
    }

    /// Deletes a task. Unknown ids are a silent no-op (`false`).
    pub fn delete(&mut self, id: TaskId) -> RepoResult<bool> {
        let deleted = self.repo.delete(id)?;
        if deleted {
            info!("event=task_delete module=service task_id={id}");
        }
        Ok(deleted)
    }

    /// Flips a task's completion flag. Unknown ids are a silent no-op.
    pub fn toggle_completion(&mut self, id: TaskId) -> RepoResult<bool> {
        self.repo.toggle_completion(id)
    }

    /// Runs one scheduler tick at `now`.
    ///
    /// Applies the daily reset check first, so the first tick of a new day
    /// clears flags and the ledger before any reminder decision, then scans
    /// incomplete tasks for reminders. Returned notifications are display
    /// events for the caller's sink; losing them is accepted.
    pub fn tick(&mut self, now: NaiveDateTime) -> RepoResult<Vec<Notification>> {
        self.reset
            .check(&mut self.repo, &mut self.ledger, now.date())?;
        Ok(scan(now, self.repo.tasks(), &mut self.ledger))
    }
}
