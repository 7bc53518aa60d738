//! Daily reset policy for the supervisor checklist.
//!
//! # Responsibility
//! - Detect calendar-day rollover via the persisted reset marker.
//! - Clear completion flags and the reminder ledger exactly once per day.
//!
//! # Invariants
//! - Only this policy reads or writes the `last_reset_date` record.
//! - A check after the marker was updated for today is a no-op.
//! - An absent or unparseable marker counts as "never reset".

use crate::repo::task_repo::{RepoResult, TaskRepository};
use crate::service::reminder::ReminderLedger;
use crate::store::{KvStore, RESET_MARKER_KEY};
use chrono::NaiveDate;
use log::{info, warn};

const MARKER_FORMAT: &str = "%Y-%m-%d";

/// Two-state policy: `Pending` until today's reset ran, `Applied` after.
/// The state lives in the persisted marker, not in this struct, so the
/// check behaves identically after a restart and across midnight.
pub struct DailyReset<'conn> {
    kv: KvStore<'conn>,
}

impl<'conn> DailyReset<'conn> {
    pub fn new(kv: KvStore<'conn>) -> Self {
        Self { kv }
    }

    /// Returns the date of the last applied reset, if one is recorded.
    pub fn last_reset(&self) -> RepoResult<Option<NaiveDate>> {
        let Some(raw) = self.kv.get(RESET_MARKER_KEY)? else {
            return Ok(None);
        };
        match NaiveDate::parse_from_str(&raw, MARKER_FORMAT) {
            Ok(date) => Ok(Some(date)),
            Err(err) => {
                warn!(
                    "event=daily_reset module=reset status=recovered marker={raw} error={err} \
                     detail=unparseable_marker_treated_as_never_reset"
                );
                Ok(None)
            }
        }
    }

    /// Applies today's reset when the marker says it has not run yet.
    ///
    /// Returns `true` when the reset fired. Compares by exact date equality,
    /// so a marker from any other day (including a future one after a clock
    /// rollback) triggers a fresh reset.
    pub fn check<R: TaskRepository>(
        &self,
        repo: &mut R,
        ledger: &mut ReminderLedger,
        today: NaiveDate,
    ) -> RepoResult<bool> {
        if self.last_reset()? == Some(today) {
            return Ok(false);
        }

        let cleared = repo.reset_completion()?;
        ledger.clear();
        self.kv
            .put(RESET_MARKER_KEY, &today.format(MARKER_FORMAT).to_string())?;
        info!(
            "event=daily_reset module=reset status=applied date={} cleared_flags={cleared}",
            today.format(MARKER_FORMAT)
        );
        Ok(true)
    }
}
