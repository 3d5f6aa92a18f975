//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the persisted task record and the display filter.
//! - Generate opaque task identifiers.
//!
//! # Invariants
//! - A task `id` never changes after creation.
//! - A live task never carries a blank title.

pub mod filter;
pub mod id;
pub mod task;
