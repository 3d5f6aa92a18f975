//! Single-threaded driver around the view binder.
//!
//! # Invariants
//! - The binder is never borrowed re-entrantly: inputs raised while a handler
//!   runs (e.g. the focus-out caused by blurring an edit field) are queued and
//!   drained in arrival order by the outermost `submit`.
//! - Listeners hold the app weakly and are owned by it; dropping the last
//!   `Rc<App>` detaches every listener.

use crate::dom::WebDocument;
use crate::listener::EventListener;
use crate::storage::LocalStorage;
use log::debug;
use std::cell::RefCell;
use std::collections::VecDeque;
use todomvc_core::{DomEvent, ViewBinder};

pub type WebBinder = ViewBinder<LocalStorage, WebDocument>;

/// Work item for the binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppInput {
    Dom(DomEvent),
    /// Captured `:filter` route segment.
    Route(String),
}

pub struct App {
    binder: RefCell<WebBinder>,
    pending: RefCell<VecDeque<AppInput>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl App {
    pub fn new(binder: WebBinder) -> Self {
        Self {
            binder: RefCell::new(binder),
            pending: RefCell::new(VecDeque::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Keeps `listener` attached for the lifetime of the app.
    pub fn attach(&self, listener: EventListener) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Queues `input` and drains the queue unless a drain is already running.
    pub fn submit(&self, input: AppInput) {
        self.pending.borrow_mut().push_back(input);

        let Ok(mut binder) = self.binder.try_borrow_mut() else {
            debug!("event=app_input module=app status=queued");
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(input) = next else {
                break;
            };
            match input {
                AppInput::Dom(event) => {
                    binder.dispatch(&event);
                }
                AppInput::Route(filter) => binder.route_changed(&filter),
            }
        }
    }

    /// Runs `f` against the binder. Must not be called from inside a handler.
    pub fn with_binder<T>(&self, f: impl FnOnce(&WebBinder) -> T) -> T {
        f(&self.binder.borrow())
    }
}
