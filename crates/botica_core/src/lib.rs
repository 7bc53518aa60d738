//! Core domain logic for the Botica pharmacy back office.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, LogSink};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError, ErrorEntry, SaleRecord};
pub use model::patient::{Patient, PatientDraft, PatientId, PatientValidationError};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_repo::{KvTaskRepository, RepoError, RepoResult, TaskRepository};
pub use service::daily_reset::DailyReset;
pub use service::directory::{whatsapp_link, DirectoryStats, EmployeeRoster, PatientDirectory};
pub use service::reminder::{Notification, NotificationKind, ReminderLedger, PRE_DUE_LEAD_MINUTES};
pub use service::runtime::{shutdown_channel, ShutdownHandle, TICK_INTERVAL};
pub use service::task_service::TaskService;
pub use store::{open_store, open_store_in_memory, KvStore, StoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
