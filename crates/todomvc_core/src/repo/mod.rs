//! Persistence adapter between the live task list and a slot store.
//!
//! # Responsibility
//! - Serialize the whole task list into one named slot.
//! - Restore a valid task list from that slot at startup.
//!
//! # Invariants
//! - Reads never fail; anything unusable degrades to an empty list.
//! - Writes always replace the full slot contents.

pub mod task_repo;
