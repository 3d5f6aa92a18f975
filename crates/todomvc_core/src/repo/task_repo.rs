//! Task list persistence over a [`KeyValueStore`] slot.
//!
//! # Responsibility
//! - Store the list as a JSON array of `{id, title, completed}` records.
//! - Filter out records that would break live-list invariants on load.
//!
//! # Invariants
//! - `load` returns records in stored order.
//! - `load` never returns two records with the same id.

use crate::model::task::Task;
use crate::store::{KeyValueStore, StoreError};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Failure while writing the task list.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Reads and writes whole task lists in named slots of a store.
pub struct TaskRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store, dropping the adapter.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Loads the task list from `slot`.
    ///
    /// Absent, unreadable or unparsable slots yield an empty list. Individual
    /// records that fail validation or repeat an earlier id are skipped.
    pub fn load(&self, slot: &str) -> Vec<Task> {
        let raw = match self.store.get_item(slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=tasks_load module=repo status=empty reason=missing_slot");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=tasks_load module=repo status=degraded reason=store_error error={err}");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(records)) => records,
            Ok(Value::Null) => Vec::new(),
            Ok(_) => {
                warn!("event=tasks_load module=repo status=degraded reason=not_an_array");
                return Vec::new();
            }
            Err(err) => {
                warn!("event=tasks_load module=repo status=degraded reason=unparsable error={err}");
                return Vec::new();
            }
        };

        let total = records.len();
        let tasks = sanitize_records(records);
        if tasks.len() != total {
            warn!(
                "event=tasks_load module=repo status=partial loaded={} skipped={}",
                tasks.len(),
                total - tasks.len()
            );
        } else {
            debug!("event=tasks_load module=repo status=ok loaded={}", tasks.len());
        }
        tasks
    }

    /// Overwrites `slot` with the full task list.
    ///
    /// # Errors
    /// - Returns store failures (for example a full quota) unchanged.
    pub fn save(&mut self, slot: &str, tasks: &[Task]) -> RepoResult<()> {
        let json = serde_json::to_string(tasks)?;
        self.store.set_item(slot, &json)?;
        debug!("event=tasks_save module=repo status=ok count={}", tasks.len());
        Ok(())
    }
}

fn sanitize_records(records: Vec<Value>) -> Vec<Task> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter_map(|record| serde_json::from_value::<Task>(record).ok())
        .map(|mut task| {
            task.title = task.title.trim().to_string();
            task
        })
        .filter(|task| task.validate().is_ok())
        .filter(|task| seen.insert(task.id.clone()))
        .collect()
}
