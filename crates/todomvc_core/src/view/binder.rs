//! View binder: engine state to page, page events to engine.
//!
//! # Responsibility
//! - Render the filtered list, footer and control state after each change.
//! - Dispatch classified DOM events through a fixed binding table.
//! - Track the transient edit session of the row being edited.
//!
//! # Invariants
//! - Every applied mutation is followed by one `render`, and every `render`
//!   overwrites the persisted slot with the full list.
//! - A binding fires only when event kind, listener region and exact target
//!   all match; everything else is ignored.
//! - Rows whose id is no longer in the list resolve to "not found" and the
//!   event becomes a no-op.

use crate::config::AppConfig;
use crate::model::task::TaskId;
use crate::repo::task_repo::TaskRepository;
use crate::service::task_list::TaskList;
use crate::store::KeyValueStore;
use crate::view::document::{Document, Region};
use crate::view::event::{DomEvent, EventKind, Key, Source, Target};
use crate::view::template::{pluralize, FooterData, Templates};
use log::{debug, error, info};

/// Edit in progress on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    /// Set by Escape; the following focus-out discards the edit.
    pub aborted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handler {
    Create,
    ToggleAll,
    ClearCompleted,
    Toggle,
    BeginEdit,
    EditKeyUp,
    CommitEdit,
    Delete,
}

struct Binding {
    kind: EventKind,
    source: Source,
    target: Target,
    handler: Handler,
}

const BINDINGS: &[Binding] = &[
    Binding {
        kind: EventKind::KeyUp,
        source: Source::NewTask,
        target: Target::NewTaskInput,
        handler: Handler::Create,
    },
    Binding {
        kind: EventKind::Change,
        source: Source::ToggleAll,
        target: Target::ToggleAll,
        handler: Handler::ToggleAll,
    },
    Binding {
        kind: EventKind::Click,
        source: Source::Footer,
        target: Target::ClearCompleted,
        handler: Handler::ClearCompleted,
    },
    Binding {
        kind: EventKind::Change,
        source: Source::TodoList,
        target: Target::RowToggle,
        handler: Handler::Toggle,
    },
    Binding {
        kind: EventKind::DoubleClick,
        source: Source::TodoList,
        target: Target::RowLabel,
        handler: Handler::BeginEdit,
    },
    Binding {
        kind: EventKind::KeyUp,
        source: Source::TodoList,
        target: Target::RowEdit,
        handler: Handler::EditKeyUp,
    },
    Binding {
        kind: EventKind::FocusOut,
        source: Source::TodoList,
        target: Target::RowEdit,
        handler: Handler::CommitEdit,
    },
    Binding {
        kind: EventKind::Click,
        source: Source::TodoList,
        target: Target::RowDestroy,
        handler: Handler::Delete,
    },
];

fn find_handler(event: &DomEvent) -> Option<Handler> {
    BINDINGS
        .iter()
        .find(|binding| {
            binding.kind == event.kind
                && binding.source == event.source
                && binding.target == event.target
        })
        .map(|binding| binding.handler)
}

/// Owns the engine, its persistence and the page it renders into.
pub struct ViewBinder<S: KeyValueStore, D: Document> {
    tasks: TaskList,
    repo: TaskRepository<S>,
    slot: String,
    templates: Templates,
    document: D,
    editing: Option<EditSession>,
}

impl<S: KeyValueStore, D: Document> ViewBinder<S, D> {
    /// Loads the task list from `config.storage_slot` and binds to `document`.
    ///
    /// Nothing is rendered until the first route or [`Self::render`] call.
    pub fn new(store: S, config: &AppConfig, templates: Templates, document: D) -> Self {
        let repo = TaskRepository::new(store);
        let tasks = TaskList::from_tasks(repo.load(&config.storage_slot));
        info!(
            "event=binder_init module=view status=ok loaded={}",
            tasks.len()
        );
        Self {
            tasks,
            repo,
            slot: config.storage_slot.clone(),
            templates,
            document,
            editing: None,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        self.repo.store()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Route listener callback: applies the captured filter and re-renders.
    pub fn route_changed(&mut self, filter_name: &str) {
        self.tasks.set_filter(filter_name);
        self.render();
    }

    /// Resolves a row's correlation id to its list position.
    pub fn index_from_row(&self, row_id: Option<&str>) -> Option<usize> {
        row_id.and_then(|id| self.tasks.index_of(id))
    }

    /// Routes one DOM event through the binding table.
    ///
    /// Returns whether a binding matched; guards inside the handler may still
    /// turn a matched event into a no-op.
    pub fn dispatch(&mut self, event: &DomEvent) -> bool {
        let Some(handler) = find_handler(event) else {
            debug!(
                "event=dom_event module=view status=ignored kind={:?} target={:?}",
                event.kind, event.target
            );
            return false;
        };

        match handler {
            Handler::Create => self.on_create(event),
            Handler::ToggleAll => self.on_toggle_all(event),
            Handler::ClearCompleted => self.on_clear_completed(),
            Handler::Toggle => self.on_toggle(event),
            Handler::BeginEdit => self.on_begin_edit(event),
            Handler::EditKeyUp => self.on_edit_key_up(event),
            Handler::CommitEdit => self.on_commit_edit(event),
            Handler::Delete => self.on_delete(event),
        }
        true
    }

    /// Re-renders the whole page from engine state and persists the list.
    pub fn render(&mut self) {
        let html = self.templates.render_list(&self.tasks.filtered_tasks());
        self.document.set_html(Region::TodoList, &html);
        self.document.set_visible(Region::Main, !self.tasks.is_empty());
        self.document
            .set_toggle_all_checked(self.tasks.active_count() == 0);
        self.render_footer();
        self.document.focus_new_task();
        self.persist();
    }

    /// Renders the footer summary and shows it only for a non-empty list.
    pub fn render_footer(&mut self) {
        let total = self.tasks.len();
        let active_count = self.tasks.active_count();
        let html = self.templates.render_footer(&FooterData {
            active_count,
            active_word: pluralize(active_count, "item"),
            completed_count: total - active_count,
            filter: self.tasks.filter(),
        });
        self.document.set_visible(Region::Footer, total > 0);
        self.document.set_html(Region::Footer, &html);
    }

    fn persist(&mut self) {
        if let Err(err) = self.repo.save(&self.slot, self.tasks.tasks()) {
            error!("event=tasks_save module=view status=error error={err}");
        }
    }

    fn row_task_id(&self, event: &DomEvent) -> Option<TaskId> {
        self.index_from_row(event.row_id.as_deref())
            .map(|index| self.tasks.tasks()[index].id.clone())
    }

    fn on_create(&mut self, event: &DomEvent) {
        if event.key != Some(Key::Enter) || event.value.trim().is_empty() {
            return;
        }
        if self.tasks.create(&event.value).is_some() {
            self.document.clear_new_task();
            self.render();
        }
    }

    fn on_toggle_all(&mut self, event: &DomEvent) {
        self.tasks.toggle_all(event.checked);
        self.render();
    }

    fn on_clear_completed(&mut self) {
        self.tasks.clear_completed();
        self.render();
    }

    fn on_toggle(&mut self, event: &DomEvent) {
        let Some(id) = self.row_task_id(event) else {
            return;
        };
        if self.tasks.toggle(&id) {
            self.render();
        }
    }

    fn on_begin_edit(&mut self, event: &DomEvent) {
        let Some(id) = self.row_task_id(event) else {
            return;
        };
        self.document.begin_row_edit(&id);
        self.editing = Some(EditSession {
            task_id: id,
            aborted: false,
        });
    }

    fn on_edit_key_up(&mut self, event: &DomEvent) {
        let Some(id) = event.row_id.clone() else {
            return;
        };
        match event.key {
            Some(Key::Enter) => self.document.blur_row_edit(&id),
            Some(Key::Escape) => {
                match &mut self.editing {
                    Some(session) if session.task_id == id => session.aborted = true,
                    editing => {
                        *editing = Some(EditSession {
                            task_id: id.clone(),
                            aborted: true,
                        });
                    }
                }
                self.document.blur_row_edit(&id);
            }
            _ => {}
        }
    }

    fn on_commit_edit(&mut self, event: &DomEvent) {
        let Some(row_id) = event.row_id.as_deref() else {
            return;
        };
        let session = self
            .editing
            .take_if(|session| session.task_id == row_id);
        let Some(id) = self.row_task_id(event) else {
            debug!("event=task_edit module=view status=stale id={row_id}");
            return;
        };

        if session.is_some_and(|session| session.aborted) {
            debug!("event=task_edit module=view status=aborted id={row_id}");
            // Leave editing mode with the title unchanged.
            self.render();
            return;
        }

        let title = event.value.trim();
        if title.is_empty() {
            self.tasks.delete(&id);
        } else {
            self.tasks.edit(&id, title);
        }
        self.render();
    }

    fn on_delete(&mut self, event: &DomEvent) {
        let Some(id) = self.row_task_id(event) else {
            return;
        };
        if self.tasks.delete(&id) {
            self.render();
        }
    }
}
