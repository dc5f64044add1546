// ============================================================================
// ELEMENT HELPERS - basic DOM access
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

use crate::models::Page;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn create_text_node(text: &str) -> Result<web_sys::Text, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .map(|doc| doc.create_text_node(text))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// `element.style.display = value`
pub fn set_display(element: &Element, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property("display", value)
}

/// `.value` of the `#id` field inside `form`; empty when the field is missing
pub fn field_value(form: &Element, id: &str) -> String {
    let Ok(Some(field)) = form.query_selector(&format!("#{}", id)) else {
        log::warn!("⚠️ [DOM] Field #{} not found", id);
        return String::new();
    };

    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Set `.value` of the `#id` field inside `form`; returns false if absent
pub fn set_field_value(form: &Element, id: &str, value: &str) -> bool {
    let Ok(Some(field)) = form.query_selector(&format!("#{}", id)) else {
        return false;
    };

    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else {
        return false;
    }
    true
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        if win.alert_with_message(message).is_err() {
            log::warn!("⚠️ [DOM] alert() failed: {}", message);
        }
    }
}

pub fn navigate(page: Page) {
    let target = page.file_name();
    log::info!("➡️ [NAV] {}", target);
    match window() {
        Some(win) => {
            if let Err(e) = win.location().set_href(target) {
                log::error!("❌ [NAV] Could not navigate to {}: {:?}", target, e);
            }
        }
        None => log::error!("❌ [NAV] No window"),
    }
}
