//! Key-value store contract backing the persistence adapter.
//!
//! # Responsibility
//! - Define the `get`/`set` contract of a persistent slot store.
//! - Provide the in-memory implementation used by tests and headless hosts.
//!
//! # Invariants
//! - `set_item` fully overwrites the slot; there is no partial update.
//! - A missing slot reads as `Ok(None)`, never as an error.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a store backend.
#[derive(Debug)]
pub enum StoreError {
    /// Backend refused or could not serve the call (missing, quota exceeded).
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "store unavailable: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Named-slot string store, in the shape of browser local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;
}
