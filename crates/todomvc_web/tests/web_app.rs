#![cfg(target_arch = "wasm32")]

use std::rc::Rc;
use todomvc_core::config::{ENTER_KEY, ESCAPE_KEY};
use todomvc_core::{AppConfig, Filter};
use todomvc_web::app::App;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{
    window, Document, Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent,
    KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"<section id="todoapp">
    <input id="new-todo">
    <section id="main">
        <input id="toggle-all" type="checkbox">
        <ul id="todo-list"></ul>
    </section>
    <footer id="footer"></footer>
</section>"#;

fn test_config(slot: &str) -> AppConfig {
    AppConfig {
        storage_slot: slot.to_string(),
        ..AppConfig::default()
    }
}

fn reset_page(slot: &str) -> Document {
    let window = window().unwrap();
    window.local_storage().unwrap().unwrap().remove_item(slot).unwrap();
    let path = window.location().pathname().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&path))
        .unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(PAGE);
    document
}

fn mount(slot: &str) -> (Document, Rc<App>) {
    let document = reset_page(slot);
    let app = todomvc_web::mount(&window().unwrap(), &test_config(slot)).unwrap();
    (document, app)
}

fn query<T: JsCast>(document: &Document, selector: &str) -> T {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn fire(target: &Element, name: &str) {
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict(name, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn key_up(target: &Element, key_code: u32) {
    let init = KeyboardEventInit::new();
    init.set_bubbles(true);
    init.set_key_code(key_code);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

fn create(document: &Document, title: &str) {
    let input: HtmlInputElement = query(document, "#new-todo");
    input.set_value(title);
    key_up(&input, ENTER_KEY);
}

fn titles(app: &App) -> Vec<String> {
    app.with_binder(|binder| {
        binder
            .tasks()
            .tasks()
            .iter()
            .map(|task| task.title.clone())
            .collect()
    })
}

fn stored(slot: &str) -> String {
    window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item(slot)
        .unwrap()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn enter_on_new_todo_renders_row_and_persists() {
    let slot = "todomvc-web-create";
    let (document, _app) = mount(slot);

    create(&document, "  Buy milk  ");

    let list = document.get_element_by_id("todo-list").unwrap();
    assert_eq!(list.children().length(), 1);
    assert!(list.inner_html().contains("<label>Buy milk</label>"));
    let footer = document.get_element_by_id("footer").unwrap();
    assert!(footer.inner_html().contains("<strong>1</strong> item left"));
    assert!(stored(slot).contains("\"title\":\"Buy milk\""));
    let input: HtmlInputElement = query(&document, "#new-todo");
    assert_eq!(input.value(), "");
}

#[wasm_bindgen_test]
fn clicking_row_toggle_completes_task() {
    let slot = "todomvc-web-toggle";
    let (document, app) = mount(slot);
    create(&document, "Walk the dog");

    query::<HtmlElement>(&document, "#todo-list .toggle").click();

    assert!(app.with_binder(|binder| binder.tasks().tasks()[0].completed));
    let toggle_all: HtmlInputElement = query(&document, "#toggle-all");
    assert!(toggle_all.checked());
    assert!(stored(slot).contains("\"completed\":true"));
}

#[wasm_bindgen_test]
fn clicking_destroy_removes_task() {
    let slot = "todomvc-web-destroy";
    let (document, app) = mount(slot);
    create(&document, "Temporary");

    query::<HtmlElement>(&document, "#todo-list .destroy").click();

    assert!(app.with_binder(|binder| binder.tasks().is_empty()));
    assert_eq!(stored(slot), "[]");
    let footer: HtmlElement = query(&document, "#footer");
    assert_eq!(footer.style().get_property_value("display").unwrap(), "none");
}

#[wasm_bindgen_test]
fn enter_in_edit_field_commits_trimmed_title_through_focus_out() {
    let slot = "todomvc-web-edit";
    let (document, app) = mount(slot);
    create(&document, "draft");

    fire(&query(&document, "#todo-list label"), "dblclick");
    let row: Element = query(&document, "#todo-list li");
    assert!(row.class_list().contains("editing"));
    assert!(app.with_binder(|binder| binder.editing().is_some()));

    let edit: HtmlInputElement = query(&document, "#todo-list .edit");
    edit.set_value("  renamed  ");
    key_up(&edit, ENTER_KEY);

    assert_eq!(titles(&app), vec!["renamed"]);
    assert!(app.with_binder(|binder| binder.editing().is_none()));
    let list = document.get_element_by_id("todo-list").unwrap();
    assert!(list.inner_html().contains("<label>renamed</label>"));
    assert!(stored(slot).contains("\"title\":\"renamed\""));
}

#[wasm_bindgen_test]
fn escape_in_edit_field_keeps_the_title() {
    let slot = "todomvc-web-escape";
    let (document, app) = mount(slot);
    create(&document, "keep me");

    fire(&query(&document, "#todo-list label"), "dblclick");
    let edit: HtmlInputElement = query(&document, "#todo-list .edit");
    edit.set_value("discarded");
    key_up(&edit, ESCAPE_KEY);

    assert_eq!(titles(&app), vec!["keep me"]);
    assert!(app.with_binder(|binder| binder.editing().is_none()));
    let row: Element = query(&document, "#todo-list li");
    assert!(!row.class_list().contains("editing"));
}

#[wasm_bindgen_test]
fn footer_clicks_off_clear_completed_do_nothing() {
    let slot = "todomvc-web-footer";
    let (document, app) = mount(slot);
    create(&document, "open");
    create(&document, "done");
    query::<HtmlElement>(&document, "#todo-list li:last-child .toggle").click();

    query::<HtmlElement>(&document, "#todo-count strong").click();
    query::<HtmlElement>(&document, "#footer").click();
    assert_eq!(titles(&app), vec!["open", "done"]);

    query::<HtmlElement>(&document, "#clear-completed").click();
    assert_eq!(titles(&app), vec!["open"]);
}

#[wasm_bindgen_test]
fn mount_without_route_writes_initial_fragment() {
    let slot = "todomvc-web-route";
    let (_document, app) = mount(slot);

    assert_eq!(window().unwrap().location().hash().unwrap(), "#/all");
    assert!(app.with_binder(|binder| *binder.tasks().filter() == Filter::All));
    assert_eq!(stored(slot), "[]");
}

#[wasm_bindgen_test]
fn dropping_the_app_detaches_its_listeners() {
    let slot = "todomvc-web-drop";
    let (document, app) = mount(slot);
    let weak_app = Rc::downgrade(&app);

    drop(app);
    assert!(weak_app.upgrade().is_none());

    create(&document, "ignored");
    assert_eq!(stored(slot), "[]");
    let list = document.get_element_by_id("todo-list").unwrap();
    assert_eq!(list.children().length(), 0);
}
