//! Page surface driven by the view binder.

use crate::model::task::TaskId;

/// Page regions the binder fills or shows/hides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Wrapper around the toggle-all control and the task list.
    Main,
    /// The list that receives rendered task rows.
    TodoList,
    /// Summary bar with counts, filter links and "clear completed".
    Footer,
}

/// Operations the binder performs on the page.
///
/// Implemented over the real DOM by the web host and by recording doubles in
/// tests. Calls that name a row by id must tolerate rows that are no longer
/// rendered.
pub trait Document {
    /// Replaces the markup inside `region`.
    fn set_html(&mut self, region: Region, html: &str);
    fn set_visible(&mut self, region: Region, visible: bool);
    fn set_toggle_all_checked(&mut self, checked: bool);
    /// Moves input focus to the new-task field.
    fn focus_new_task(&mut self);
    fn clear_new_task(&mut self);
    /// Puts the row for `id` into editing mode and focuses its edit field.
    fn begin_row_edit(&mut self, id: &TaskId);
    /// Removes focus from the edit field of row `id`.
    ///
    /// Hosts may deliver the resulting focus-out event synchronously; it must
    /// be queued rather than dispatched re-entrantly.
    fn blur_row_edit(&mut self, id: &TaskId);
}
