//! In-memory task list and filter.
//!
//! # Responsibility
//! - Apply create/toggle/edit/delete/bulk mutations to the ordered list.
//! - Answer active/completed/filtered subset queries in display order.
//!
//! # Invariants
//! - Display order is creation order; mutations never reorder tasks.
//! - Ids are unique across the list.
//! - No task holds a blank title; blanking a title deletes the task.
//! - Unknown ids make every mutation a silent no-op.

use crate::model::filter::Filter;
use crate::model::task::{Task, TaskId};
use log::debug;

/// Ordered task list plus the display filter.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already validated list, e.g. one returned by the repository.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::All,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Position of the task with `id`, scanning from the end.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.tasks.iter().rposition(|task| task.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.index_of(id).map(|index| &self.tasks[index])
    }

    /// Appends a new open task with a generated id.
    ///
    /// Returns `None` and leaves the list untouched when `raw_title` is blank.
    pub fn create(&mut self, raw_title: &str) -> Option<&Task> {
        let task = Task::new(raw_title)?;
        Some(self.push(task))
    }

    /// Appends a new open task under a caller-chosen id.
    ///
    /// Returns `None` when the title is blank, the id is empty, or the id is
    /// already taken.
    pub fn create_with_id(&mut self, id: impl Into<TaskId>, raw_title: &str) -> Option<&Task> {
        let task = Task::with_id(id, raw_title).ok()?;
        if self.index_of(&task.id).is_some() {
            debug!("event=task_create module=engine status=skipped reason=duplicate_id");
            return None;
        }
        Some(self.push(task))
    }

    fn push(&mut self, task: Task) -> &Task {
        debug!(
            "event=task_create module=engine status=ok id={} total={}",
            task.id,
            self.tasks.len() + 1
        );
        let index = self.tasks.len();
        self.tasks.push(task);
        &self.tasks[index]
    }

    /// Flips `completed` on the task with `id`. Returns whether a task matched.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!("event=task_toggle module=engine status=skipped reason=not_found");
            return false;
        };
        let task = &mut self.tasks[index];
        task.completed = !task.completed;
        debug!(
            "event=task_toggle module=engine status=ok id={} completed={}",
            task.id, task.completed
        );
        true
    }

    /// Sets `completed = checked` on every task.
    pub fn toggle_all(&mut self, checked: bool) {
        for task in &mut self.tasks {
            task.completed = checked;
        }
        debug!(
            "event=task_toggle_all module=engine status=ok checked={checked} total={}",
            self.tasks.len()
        );
    }

    /// Replaces the title of the task with `id`.
    ///
    /// A title that trims to nothing deletes the task instead. Returns whether
    /// a task matched.
    pub fn edit(&mut self, id: &str, new_title: &str) -> bool {
        let title = new_title.trim();
        if title.is_empty() {
            return self.delete(id);
        }
        let Some(index) = self.index_of(id) else {
            debug!("event=task_edit module=engine status=skipped reason=not_found");
            return false;
        };
        self.tasks[index].title = title.to_string();
        debug!("event=task_edit module=engine status=ok id={id}");
        true
    }

    /// Removes the task with `id`. Returns whether a task matched.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!("event=task_delete module=engine status=skipped reason=not_found");
            return false;
        };
        self.tasks.remove(index);
        debug!(
            "event=task_delete module=engine status=ok id={id} total={}",
            self.tasks.len()
        );
        true
    }

    /// Drops every completed task and resets the filter to `All`.
    ///
    /// Returns the number of removed tasks.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(Task::is_active);
        self.filter = Filter::All;
        let removed = before - self.tasks.len();
        debug!("event=tasks_clear_completed module=engine status=ok removed={removed}");
        removed
    }

    /// Sets the filter from a route segment; unknown names pass through.
    pub fn set_filter(&mut self, name: &str) {
        self.filter = Filter::from_name(name);
        debug!("event=filter_set module=engine status=ok filter={}", self.filter);
    }

    pub fn active_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_active()).collect()
    }

    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed).collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_active()).count()
    }

    /// Tasks visible under the current filter. `Other` shows everything.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        match self.filter {
            Filter::Active => self.active_tasks(),
            Filter::Completed => self.completed_tasks(),
            Filter::All | Filter::Other(_) => self.tasks.iter().collect(),
        }
    }
}
