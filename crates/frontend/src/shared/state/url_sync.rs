//! Browser half of the filter↔URL synchronization.
//!
//! Writes use replace-history so filter tweaks never pollute the back
//! stack; an equality check on `location.search` before writing (and in the
//! popstate handler before pulling state back in) keeps the two directions
//! from re-triggering each other.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

use super::filter_state::EventFilter;

/// Parse the current `location.search` into a filter. Malformed or absent
/// parameters degrade to defaults inside the parser.
pub fn read_from_location() -> EventFilter {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    EventFilter::from_query_string(&search)
}

/// Mirror the filter into the address bar, replacing the current history
/// entry. A no-op when the URL already encodes this filter.
pub fn write_to_location(filter: &EventFilter) {
    let Some(w) = window() else {
        return;
    };

    let qs = filter.to_query_string();
    let new_search = if qs.is_empty() {
        String::new()
    } else {
        format!("?{}", qs)
    };

    let current = w.location().search().unwrap_or_default();
    if current == new_search {
        return;
    }

    let path = w.location().pathname().unwrap_or_else(|_| "/".to_string());
    let url = format!("{}{}", path, new_search);
    if let Ok(history) = w.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
    }
}

/// A window `popstate` subscription that detaches itself when dropped, so a
/// page can park it in a `StoredValue` and rely on owner disposal for
/// cleanup.
pub struct PopstateListener {
    closure: Option<Closure<dyn FnMut()>>,
}

impl PopstateListener {
    pub fn attach(callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                closure.as_ref().unchecked_ref(),
            );
        }
        Self {
            closure: Some(closure),
        }
    }
}

impl Drop for PopstateListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Some(w) = window() {
                let _ = w.remove_event_listener_with_callback(
                    "popstate",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
