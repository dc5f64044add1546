use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, link, set_inner_html, ElementBuilder};
use crate::models::Page;
use crate::viewmodels::WelcomeView;

/// "Welcome, <strong>name</strong>" or sign-in / register links
pub fn render_welcome(target: &Element, view: &WelcomeView) -> Result<(), JsValue> {
    set_inner_html(target, "");

    match view {
        WelcomeView::Greeting(name) => {
            let strong = ElementBuilder::new("strong")?.text(name).build();
            let banner = ElementBuilder::new("span")?
                .text("Welcome, ")
                .child(strong)?
                .build();
            append_child(target, &banner)?;
        }
        WelcomeView::SignInPrompt => {
            let prompt = ElementBuilder::new("span")?
                .child(link(Page::Login.file_name(), "Sign in")?)?
                .append_text(" or ")?
                .child(link(Page::Register.file_name(), "Register")?)?
                .build();
            append_child(target, &prompt)?;
        }
    }
    Ok(())
}
