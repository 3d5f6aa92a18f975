//! Browser host for the TodoMVC core.
//!
//! Wires the view binder to the live page: local storage for persistence,
//! DOM listeners for input, and `hashchange` for the filter route.

pub mod app;
pub mod dom;
pub mod events;
pub mod listener;
pub mod router;
pub mod storage;

use app::App;
use dom::WebDocument;
use log::info;
use std::rc::Rc;
use storage::LocalStorage;
use todomvc_core::{core_version, AppConfig, Templates, ViewBinder};
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Page entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    let level = config.log_level.parse().unwrap_or(log::Level::Info);
    _ = console_log::init_with_level(level);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let app = mount(&window, &config)?;
    // The page keeps the app, and with it every listener, until unload.
    std::mem::forget(app);
    Ok(())
}

/// Loads stored tasks, binds listeners and renders the current route.
///
/// Listeners detach when the returned app is dropped.
pub fn mount(window: &Window, config: &AppConfig) -> Result<Rc<App>, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let store =
        LocalStorage::from_window(window).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let binder = ViewBinder::new(
        store,
        config,
        Templates::default(),
        WebDocument::new(document.clone()),
    );
    let app = Rc::new(App::new(binder));

    events::bind(&app, &document)?;
    router::listen(&app, window, &config.initial_route)?;

    info!(
        "event=app_start module=web status=ok version={}",
        core_version()
    );
    Ok(app)
}
