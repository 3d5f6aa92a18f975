//! Owned DOM event listeners.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget};

/// A listener that stays attached until dropped.
pub struct EventListener {
    target: EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new(
        target: &EventTarget,
        event_name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_name,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
        if removed.is_err() {
            warn!(
                "event=listener_remove module=listener status=error event_name={}",
                self.event_name
            );
        }
    }
}
