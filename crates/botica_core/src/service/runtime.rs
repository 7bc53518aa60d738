//! Polling runtime for the scheduler tick loop.
//!
//! # Responsibility
//! - Drive `TaskService::tick` on a fixed interval from the host clock.
//! - Run one immediate tick on startup so a reminder due "now" is not
//!   delayed by the first interval.
//! - Tear the timer down deterministically when the shutdown handle fires.
//!
//! # Invariants
//! - Ticks run to completion on the caller's thread; no tick overlaps a
//!   CRUD call issued by the same owner.
//! - After `ShutdownHandle::stop`, no further tick callbacks run.

use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::service::reminder::Notification;
use crate::service::task_service::TaskService;
use chrono::Local;
use crossbeam_channel::{bounded, select, tick, Receiver, Sender};
use log::info;
use std::time::Duration;

/// Reference polling cadence for reset checks and reminder scans.
pub const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Stops a running scheduler loop. Safe to trigger from another thread.
pub struct ShutdownHandle {
    tx: Sender<()>,
}

impl ShutdownHandle {
    /// Requests loop shutdown. Idempotent; later calls are no-ops.
    pub fn stop(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Creates the shutdown pair for [`run`].
pub fn shutdown_channel() -> (ShutdownHandle, Receiver<()>) {
    let (tx, rx) = bounded(1);
    (ShutdownHandle { tx }, rx)
}

/// Runs the polling loop until the shutdown receiver fires.
///
/// Every batch of notifications is handed to `sink` fire-and-forget; the
/// sink observes them in emission order within a tick.
pub fn run<R: TaskRepository>(
    service: &mut TaskService<'_, R>,
    interval: Duration,
    shutdown: &Receiver<()>,
    mut sink: impl FnMut(Notification),
) -> RepoResult<()> {
    info!(
        "event=scheduler_start module=runtime interval_ms={}",
        interval.as_millis()
    );

    for notification in service.tick(Local::now().naive_local())? {
        sink(notification);
    }

    let ticker = tick(interval);
    loop {
        select! {
            recv(ticker) -> _ => {
                for notification in service.tick(Local::now().naive_local())? {
                    sink(notification);
                }
            }
            recv(shutdown) -> _ => {
                info!("event=scheduler_stop module=runtime status=ok");
                return Ok(());
            }
        }
    }
}
