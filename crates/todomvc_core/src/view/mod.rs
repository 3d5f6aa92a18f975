//! Rendering and DOM-event binding.
//!
//! # Responsibility
//! - Turn engine state into list and footer markup through injected templates.
//! - Map host DOM events to engine mutations through one dispatch table.
//! - Persist and re-render after every mutation.
//!
//! # Invariants
//! - Every render replaces the whole list region; there is no diffing.
//! - The binder touches the page only through the [`document::Document`] trait.

pub mod binder;
pub mod document;
pub mod event;
pub mod template;
