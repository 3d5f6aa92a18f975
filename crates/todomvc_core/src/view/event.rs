//! Host-neutral DOM event records.
//!
//! The host classifies each browser event by listener region and by which
//! control was the exact target, then hands the record to the binder.

use crate::config::{ENTER_KEY, ESCAPE_KEY};
use crate::model::task::TaskId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    KeyUp,
    Change,
    Click,
    DoubleClick,
    FocusOut,
}

/// Region whose listener received the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    NewTask,
    ToggleAll,
    Footer,
    TodoList,
}

/// The exact control an event was dispatched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `#new-todo`
    NewTaskInput,
    /// `#toggle-all`
    ToggleAll,
    /// `#clear-completed`
    ClearCompleted,
    /// `.toggle` checkbox inside a row.
    RowToggle,
    /// `label` inside a row.
    RowLabel,
    /// `.edit` field inside a row.
    RowEdit,
    /// `.destroy` button inside a row.
    RowDestroy,
    /// Anything else inside a listened region.
    Other,
}

/// Keys the binder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other(u32),
}

impl Key {
    pub fn from_code(code: u32) -> Self {
        match code {
            ENTER_KEY => Self::Enter,
            ESCAPE_KEY => Self::Escape,
            other => Self::Other(other),
        }
    }
}

/// One classified DOM event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub source: Source,
    pub target: Target,
    /// Correlation id of the nearest enclosing task row, if any.
    pub row_id: Option<TaskId>,
    /// Current value of a text target.
    pub value: String,
    /// Checked state of a checkbox target.
    pub checked: bool,
    pub key: Option<Key>,
}

impl DomEvent {
    pub fn new(kind: EventKind, source: Source, target: Target) -> Self {
        Self {
            kind,
            source,
            target,
            row_id: None,
            value: String::new(),
            checked: false,
            key: None,
        }
    }

    pub fn with_row(mut self, id: impl Into<TaskId>) -> Self {
        self.row_id = Some(id.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_key_code(mut self, code: u32) -> Self {
        self.key = Some(Key::from_code(code));
        self
    }
}
