// ============================================================================
// EVENT HANDLING
// ============================================================================
// Handlers are attached once per page load and live as long as the page,
// so closure.forget() does not accumulate listeners.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

use crate::dom::document;

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_submit<F>(form: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `handler` once the document is parsed: right away if it already is,
/// otherwise on DOMContentLoaded
pub fn on_dom_ready<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;

    if doc.ready_state() != "loading" {
        handler();
        return Ok(());
    }

    // once_into_js frees itself after the single call
    let callback = Closure::once_into_js(move |_e: Event| handler());
    doc.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}
