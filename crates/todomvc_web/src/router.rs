//! Route listener: URL fragment changes drive the display filter.

use crate::app::{App, AppInput};
use crate::listener::EventListener;
use log::debug;
use std::rc::Rc;
use todomvc_core::{parse_route, route_or_initial};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Subscribes to `hashchange` and applies the current (or initial) route.
///
/// A page without a route gets `initial_route` written into its fragment
/// through `history.replaceState`, which raises no `hashchange`; the route is
/// applied exactly once.
pub fn listen(app: &Rc<App>, window: &Window, initial_route: &str) -> Result<(), JsValue> {
    let location = window.location();

    let weak_app = Rc::downgrade(app);
    let listener_location = location.clone();
    let listener = EventListener::new(window, "hashchange", move |_| {
        let Some(app) = weak_app.upgrade() else {
            return;
        };
        let fragment = listener_location.hash().unwrap_or_default();
        match parse_route(&fragment) {
            Some(filter) => app.submit(AppInput::Route(filter)),
            None => debug!("event=route_change module=router status=ignored"),
        }
    })?;
    app.attach(listener);

    let fragment = location.hash()?;
    if parse_route(&fragment).is_none() {
        window.history()?.replace_state_with_url(
            &JsValue::NULL,
            "",
            Some(&format!("#{initial_route}")),
        )?;
    }
    if let Some(filter) = route_or_initial(&fragment, initial_route) {
        app.submit(AppInput::Route(filter));
    }
    Ok(())
}
