//! `window.localStorage` as a slot store.

use log::warn;
use todomvc_core::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Slot store over the page origin's local storage.
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Opens local storage for `window`.
    ///
    /// # Errors
    /// - `Unavailable` when storage is disabled or blocked for this origin.
    pub fn from_window(window: &Window) -> StoreResult<Self> {
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage.set_item(key, value).map_err(|err| {
            warn!(
                "event=slot_write module=storage status=error backend=local_storage bytes={}",
                value.len()
            );
            js_error(err)
        })
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
