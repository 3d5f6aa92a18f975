//! [`Document`] over the live TodoMVC page.
//!
//! Missing elements are logged and skipped; the page markup is expected to
//! provide `#main`, `#todo-list`, `#footer`, `#toggle-all` and `#new-todo`.

use log::warn;
use todomvc_core::{Document, Region, TaskId};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

pub const NEW_TODO_ID: &str = "new-todo";
pub const TOGGLE_ALL_ID: &str = "toggle-all";
pub const CLEAR_COMPLETED_ID: &str = "clear-completed";
pub const MAIN_ID: &str = "main";
pub const TODO_LIST_ID: &str = "todo-list";
pub const FOOTER_ID: &str = "footer";

const ROW_TAG: &str = "LI";
const ROW_ID_ATTRIBUTE: &str = "data-id";
const EDITING_CLASS: &str = "editing";
const EDIT_FIELD_SELECTOR: &str = ".edit";

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            warn!("event=dom_lookup module=dom status=missing element_id={id}");
        }
        element
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    fn region(&self, region: Region) -> Option<Element> {
        self.element(match region {
            Region::Main => MAIN_ID,
            Region::TodoList => TODO_LIST_ID,
            Region::Footer => FOOTER_ID,
        })
    }

    fn row(&self, id: &TaskId) -> Option<Element> {
        let rows = self.element(TODO_LIST_ID)?.children();
        (0..rows.length())
            .filter_map(|index| rows.item(index))
            .find(|row| row.get_attribute(ROW_ID_ATTRIBUTE).as_deref() == Some(id.as_str()))
    }

    fn edit_field(&self, id: &TaskId) -> Option<HtmlElement> {
        self.row(id)?
            .query_selector(EDIT_FIELD_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl Document for WebDocument {
    fn set_html(&mut self, region: Region, html: &str) {
        if let Some(element) = self.region(region) {
            element.set_inner_html(html);
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        let Some(element) = self
            .region(region)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let display = if visible { "block" } else { "none" };
        if element.style().set_property("display", display).is_err() {
            warn!("event=dom_style module=dom status=error region={region:?}");
        }
    }

    fn set_toggle_all_checked(&mut self, checked: bool) {
        if let Some(input) = self.input(TOGGLE_ALL_ID) {
            input.set_checked(checked);
        }
    }

    fn focus_new_task(&mut self) {
        if let Some(input) = self.input(NEW_TODO_ID) {
            let _ = input.focus();
        }
    }

    fn clear_new_task(&mut self) {
        if let Some(input) = self.input(NEW_TODO_ID) {
            input.set_value("");
        }
    }

    fn begin_row_edit(&mut self, id: &TaskId) {
        if let Some(row) = self.row(id) {
            let _ = row.class_list().add_1(EDITING_CLASS);
        }
        if let Some(field) = self.edit_field(id) {
            let _ = field.focus();
        }
    }

    fn blur_row_edit(&mut self, id: &TaskId) {
        if let Some(field) = self.edit_field(id) {
            let _ = field.blur();
        }
    }
}

/// Correlation id of the task row enclosing `element`.
///
/// Walks up the parent chain to the nearest `li`; returns `None` when there is
/// no enclosing row or it carries no id.
pub fn row_id_for(element: &Element) -> Option<TaskId> {
    let mut current = Some(element.clone());
    while let Some(node) = current {
        if node.tag_name() == ROW_TAG {
            return node.get_attribute(ROW_ID_ATTRIBUTE);
        }
        current = node.parent_element();
    }
    None
}
