use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, link, set_display, set_inner_html, ElementBuilder};
use crate::models::Page;
use crate::viewmodels::HistoryView;

/// Fill #historyContainer and reveal #historySection (if the page has one)
pub fn render_history(container: &Element, section: Option<&Element>, view: &HistoryView) -> Result<(), JsValue> {
    set_inner_html(container, "");

    match view {
        HistoryView::LoginPrompt => {
            let prompt = ElementBuilder::new("p")?
                .text("Please ")
                .child(link(Page::Login.file_name(), "login")?)?
                .append_text(" to view your service history.")?
                .build();
            append_child(container, &prompt)?;
        }
        HistoryView::Empty => {
            let prompt = ElementBuilder::new("p")?
                .text("No service bookings found. ")
                .child(link(Page::Booking.file_name(), "Book a new service")?)?
                .build();
            append_child(container, &prompt)?;
        }
        HistoryView::Entries(lines) => {
            let heading = ElementBuilder::new("h4")?
                .class("mb-3")
                .text("Your Service History")
                .build();
            let list = ElementBuilder::new("ul")?.class("list-group").build();
            for line in lines {
                let item = ElementBuilder::new("li")?.class("list-group-item").text(line).build();
                append_child(&list, &item)?;
            }
            append_child(container, &heading)?;
            append_child(container, &list)?;
        }
    }

    if let Some(section) = section {
        set_display(section, "block")?;
    }
    Ok(())
}

