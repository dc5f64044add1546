use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::{navigate, on_click, set_display};
use crate::models::Page;
use crate::state::BrowserContext;

/// Show the logout button only with a stored token; clicking it ends the session
pub fn wire_logout_button(ctx: &Rc<BrowserContext>, button: &Element) -> Result<(), JsValue> {
    let handler_ctx = Rc::clone(ctx);
    on_click(button, move |e: MouseEvent| {
        e.prevent_default();
        handler_ctx.session.clear_auth();
        navigate(Page::Login);
    })?;

    let display = if ctx.session.is_authenticated() { "inline" } else { "none" };
    set_display(button, display)
}
