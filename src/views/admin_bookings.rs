// ============================================================================
// ADMIN BOOKINGS - table of every booking on the admin homepage
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::viewmodels::AdminBookingsView;

pub fn render_admin_bookings(container: &Element, view: &AdminBookingsView) -> Result<(), JsValue> {
    match view {
        AdminBookingsView::Unavailable => {
            set_inner_html(container, "");
            let message = ElementBuilder::new("p")?
                .text("Unable to fetch bookings. Ensure admin is logged in.")
                .build();
            append_child(container, &message)?;
        }
        AdminBookingsView::Table { columns, rows } => {
            let header_row = ElementBuilder::new("tr")?.build();
            for column in columns {
                append_child(&header_row, &ElementBuilder::new("th")?.text(column).build())?;
            }
            let thead = ElementBuilder::new("thead")?.child(header_row)?.build();

            let tbody = ElementBuilder::new("tbody")?.build();
            for row in rows {
                let tr = ElementBuilder::new("tr")?.build();
                for cell in row {
                    append_child(&tr, &ElementBuilder::new("td")?.text(cell).build())?;
                }
                append_child(&tbody, &tr)?;
            }

            let table = ElementBuilder::new("table")?
                .class("table")
                .child(thead)?
                .child(tbody)?
                .build();
            // Appended, so any static content already in the container stays
            append_child(container, &table)?;
        }
    }
    Ok(())
}
