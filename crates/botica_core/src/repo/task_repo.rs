//! Task repository contract and key-value-backed implementation.
//!
//! # Responsibility
//! - Own the ordered in-memory task list for the session.
//! - Persist the full serialized list after every mutation.
//! - Recover from absent or malformed persisted records by starting empty.
//!
//! # Invariants
//! - Task ids are unique within the list for its entire lifetime.
//! - The list keeps insertion order; no other ordering is guaranteed.
//! - Readers always see the latest in-memory state, even if a persist is
//!   still pending from their perspective.

use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::store::{KvStore, StoreError, StoreResult, TASKS_KEY};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for task persistence operations.
///
/// An unknown task id is not represented here: update/delete/toggle on a
/// stale reference is a silent no-op by contract, because the list may have
/// changed since the caller captured the id.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for the supervisor task list.
pub trait TaskRepository {
    /// Read access to the live in-memory list, in insertion order.
    fn tasks(&self) -> &[Task];
    /// Validates input, appends a new incomplete task, persists.
    fn create(&mut self, title: &str, time: &str) -> RepoResult<TaskId>;
    /// Replaces title/time of the matching task. `false` when `id` is unknown.
    fn update(&mut self, id: TaskId, title: &str, time: &str) -> RepoResult<bool>;
    /// Removes the matching task. `false` when `id` is unknown.
    fn delete(&mut self, id: TaskId) -> RepoResult<bool>;
    /// Flips the completion flag. `false` when `id` is unknown.
    fn toggle_completion(&mut self, id: TaskId) -> RepoResult<bool>;
    /// Clears every completion flag. `false` when nothing was set.
    fn reset_completion(&mut self) -> RepoResult<bool>;
}

/// Key-value-backed task repository.
pub struct KvTaskRepository<'conn> {
    kv: KvStore<'conn>,
    tasks: Vec<Task>,
}

impl<'conn> KvTaskRepository<'conn> {
    /// Loads the persisted task list from the store.
    ///
    /// A missing record yields an empty list, and so does a malformed one;
    /// record content never fails the load.
    pub fn open(kv: KvStore<'conn>) -> StoreResult<Self> {
        let tasks = match kv.get(TASKS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(
                        "event=task_load module=repo status=recovered error={err} \
                         detail=malformed_record_replaced_with_empty_list"
                    );
                    Vec::new()
                }
            },
        };
        Ok(Self { kv, tasks })
    }

    fn persist(&self) -> RepoResult<()> {
        let raw = serde_json::to_string(&self.tasks).map_err(RepoError::Serialize)?;
        self.kv.put(TASKS_KEY, &raw)?;
        Ok(())
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}

impl TaskRepository for KvTaskRepository<'_> {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn create(&mut self, title: &str, time: &str) -> RepoResult<TaskId> {
        let task = Task::new(title, time)?;
        let id = task.id;
        self.tasks.push(task);
        self.persist()?;
        Ok(id)
    }

    fn update(&mut self, id: TaskId, title: &str, time: &str) -> RepoResult<bool> {
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.apply_edit(title, time)?;
        self.persist()?;
        Ok(true)
    }

    fn delete(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn toggle_completion(&mut self, id: TaskId) -> RepoResult<bool> {
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(true)
    }

    fn reset_completion(&mut self) -> RepoResult<bool> {
        let mut changed = false;
        for task in &mut self.tasks {
            changed |= task.completed;
            task.completed = false;
        }
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }
}
