//! Core of the TodoMVC task list.
//!
//! Owns the task model, the engine, persistence through a slot store, and the
//! view binder that renders into and receives events from a host page. Hosts
//! supply the page ([`Document`]) and the store ([`KeyValueStore`]).

pub mod config;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;
pub mod store;
pub mod view;

pub use config::{default_log_level, AppConfig, DEFAULT_ROUTE, DEFAULT_STORAGE_SLOT};
pub use model::filter::Filter;
pub use model::id::new_id;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use repo::task_repo::{RepoError, RepoResult, TaskRepository};
pub use route::{parse_route, route_or_initial};
pub use service::task_list::TaskList;
pub use store::{KeyValueStore, MemoryStore, StoreError, StoreResult};
pub use view::binder::{EditSession, ViewBinder};
pub use view::document::{Document, Region};
pub use view::event::{DomEvent, EventKind, Key, Source, Target};
pub use view::template::{pluralize, FooterData, Templates};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
