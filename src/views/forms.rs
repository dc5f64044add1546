// ============================================================================
// FORMS - submit handlers for login / register / booking
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event};

use crate::dom::{field_value, get_element_by_id, on_submit, set_field_value};
use crate::models::{BookingRequest, LoginRequest, RegisterRequest};
use crate::services::{login, register, submit_booking, LoginMode};
use crate::state::BrowserContext;
use crate::viewmodels::booking_prefill;
use crate::views::present;

/// Attach the login handler if `#form_id` exists on this page
pub fn wire_login_form(ctx: &Rc<BrowserContext>, form_id: &str, mode: LoginMode) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(form_id) else {
        return Ok(false);
    };

    let ctx = Rc::clone(ctx);
    let fields = form.clone();
    on_submit(&form, move |e: Event| {
        e.prevent_default();
        let request = LoginRequest {
            email: field_value(&fields, "email"),
            password: field_value(&fields, "password"),
        };
        let ctx = Rc::clone(&ctx);
        spawn_local(async move {
            present(&login(&ctx, request, mode).await);
        });
    })?;

    log::debug!("🔗 [FORMS] #{} wired ({:?})", form_id, mode);
    Ok(true)
}

pub fn wire_register_form(ctx: &Rc<BrowserContext>, form_id: &str) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(form_id) else {
        return Ok(false);
    };

    let ctx = Rc::clone(ctx);
    let fields = form.clone();
    on_submit(&form, move |e: Event| {
        e.prevent_default();
        let request = RegisterRequest {
            name: field_value(&fields, "name"),
            phone: field_value(&fields, "phone"),
            email: field_value(&fields, "email"),
            password: field_value(&fields, "password"),
        };
        let ctx = Rc::clone(&ctx);
        spawn_local(async move {
            present(&register(&ctx, request).await);
        });
    })?;

    log::debug!("🔗 [FORMS] #{} wired", form_id);
    Ok(true)
}

/// Attach the booking handler and pre-fill contact fields from the stored profile
pub fn wire_booking_form(ctx: &Rc<BrowserContext>, form_id: &str) -> Result<bool, JsValue> {
    let Some(form) = get_element_by_id(form_id) else {
        return Ok(false);
    };

    let handler_ctx = Rc::clone(ctx);
    let fields = form.clone();
    on_submit(&form, move |e: Event| {
        e.prevent_default();
        let request = read_booking(&fields);
        let ctx = Rc::clone(&handler_ctx);
        spawn_local(async move {
            present(&submit_booking(&ctx, request).await);
        });
    })?;

    if let Some(user) = ctx.session.get_user() {
        for (id, value) in booking_prefill(&user) {
            set_field_value(&form, id, &value);
        }
    }

    log::debug!("🔗 [FORMS] #{} wired", form_id);
    Ok(true)
}

fn read_booking(form: &Element) -> BookingRequest {
    BookingRequest {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        phone: field_value(form, "phone"),
        bike_model: field_value(form, "bikeModel"),
        service_type: field_value(form, "serviceType"),
        service_date: field_value(form, "serviceDate"),
        service_time: field_value(form, "serviceTime"),
        notes: field_value(form, "notes"),
    }
}
