//! DOM listeners and event classification.
//!
//! Listeners sit on the same regions as the page markup expects: the new-task
//! input, the toggle-all control, the footer, and the task list (delegated for
//! every row). Each browser event is classified by its exact target and handed
//! to the app queue; the binder's table decides what, if anything, happens.

use crate::app::{App, AppInput};
use crate::dom::{row_id_for, CLEAR_COMPLETED_ID, FOOTER_ID, NEW_TODO_ID, TODO_LIST_ID, TOGGLE_ALL_ID};
use crate::listener::EventListener;
use std::rc::Rc;
use todomvc_core::{DomEvent, EventKind, Source, Target};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlInputElement, KeyboardEvent};

const ROW_LISTENERS: &[(&str, EventKind)] = &[
    ("change", EventKind::Change),
    ("dblclick", EventKind::DoubleClick),
    ("keyup", EventKind::KeyUp),
    ("focusout", EventKind::FocusOut),
    ("click", EventKind::Click),
];

/// Attaches every listener to `app`.
pub fn bind(app: &Rc<App>, document: &web_sys::Document) -> Result<(), JsValue> {
    listen(app, document, NEW_TODO_ID, "keyup", EventKind::KeyUp, Source::NewTask)?;
    listen(app, document, TOGGLE_ALL_ID, "change", EventKind::Change, Source::ToggleAll)?;
    listen(app, document, FOOTER_ID, "click", EventKind::Click, Source::Footer)?;
    for &(name, kind) in ROW_LISTENERS {
        listen(app, document, TODO_LIST_ID, name, kind, Source::TodoList)?;
    }
    Ok(())
}

fn listen(
    app: &Rc<App>,
    document: &web_sys::Document,
    element_id: &str,
    event_name: &'static str,
    kind: EventKind,
    source: Source,
) -> Result<(), JsValue> {
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{element_id}")))?;

    let weak_app = Rc::downgrade(app);
    let listener = EventListener::new(&element, event_name, move |event: Event| {
        let Some(app) = weak_app.upgrade() else {
            return;
        };
        if let Some(event) = classify(&event, kind, source) {
            app.submit(AppInput::Dom(event));
        }
    })?;
    app.attach(listener);
    Ok(())
}

/// Builds the binder's record for a browser event.
///
/// Returns `None` when the event has no element target.
pub fn classify(event: &Event, kind: EventKind, source: Source) -> Option<DomEvent> {
    let target = event.target()?.dyn_into::<Element>().ok()?;

    let mut record = DomEvent::new(kind, source, target_role(&target, source));
    if source == Source::TodoList {
        if let Some(id) = row_id_for(&target) {
            record = record.with_row(id);
        }
    }
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        record = record.with_value(input.value()).with_checked(input.checked());
    }
    if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
        record = record.with_key_code(keyboard.key_code());
    }
    Some(record)
}

fn target_role(target: &Element, source: Source) -> Target {
    match source {
        Source::NewTask if target.id() == NEW_TODO_ID => Target::NewTaskInput,
        Source::ToggleAll if target.id() == TOGGLE_ALL_ID => Target::ToggleAll,
        Source::Footer if target.id() == CLEAR_COMPLETED_ID => Target::ClearCompleted,
        Source::TodoList => match (target.tag_name().as_str(), target.class_name().as_str()) {
            ("LABEL", _) => Target::RowLabel,
            (_, "toggle") => Target::RowToggle,
            (_, "edit") => Target::RowEdit,
            (_, "destroy") => Target::RowDestroy,
            _ => Target::Other,
        },
        _ => Target::Other,
    }
}
