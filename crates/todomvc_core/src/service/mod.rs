//! Task list engine.
//!
//! # Responsibility
//! - Own the ordered task list and the current filter.
//! - Expose pure queries and the mutation set used by the view binder.
//!
//! # See also
//! - `view::binder` for the persist-and-render step after each mutation.

pub mod task_list;
