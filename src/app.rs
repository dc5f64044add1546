// ============================================================================
// APP - page wiring. The same bundle runs on every page; each piece only
// activates when its element exists.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::get_element_by_id;
use crate::services::{fetch_all_bookings, fetch_history, LoginMode};
use crate::state::BrowserContext;
use crate::viewmodels::{AdminBookingsView, HistoryView, WelcomeView};
use crate::views::{
    render_admin_bookings, render_history, render_welcome, wire_booking_form, wire_login_form,
    wire_logout_button, wire_register_form,
};

pub const LOGOUT_BUTTON_ID: &str = "logoutBtn";
pub const USER_LOGIN_FORM_ID: &str = "userLoginForm";
pub const ADMIN_LOGIN_FORM_ID: &str = "adminLoginForm";
pub const REGISTER_FORM_ID: &str = "registerForm";
pub const BOOKING_FORM_ID: &str = "bookingForm";
pub const HISTORY_CONTAINER_ID: &str = "historyContainer";
pub const HISTORY_SECTION_ID: &str = "historySection";
pub const WELCOME_ID: &str = "welcomeUser";
pub const ADMIN_BOOKINGS_ID: &str = "adminBookingsContainer";

pub struct App {
    ctx: Rc<BrowserContext>,
}

impl App {
    pub fn new() -> Self {
        Self {
            ctx: Rc::new(BrowserContext::browser()),
        }
    }

    /// Wire everything present on the current page
    pub fn mount(&self) -> Result<(), JsValue> {
        log::info!("🎬 [APP] Mounting (authenticated: {})", self.ctx.session.is_authenticated());

        if let Some(button) = get_element_by_id(LOGOUT_BUTTON_ID) {
            wire_logout_button(&self.ctx, &button)?;
        }

        wire_login_form(&self.ctx, USER_LOGIN_FORM_ID, LoginMode::User)?;
        wire_login_form(&self.ctx, ADMIN_LOGIN_FORM_ID, LoginMode::Admin)?;
        wire_register_form(&self.ctx, REGISTER_FORM_ID)?;
        wire_booking_form(&self.ctx, BOOKING_FORM_ID)?;

        self.mount_history();
        self.mount_welcome()?;
        self.mount_admin_bookings();
        Ok(())
    }

    fn mount_history(&self) {
        let Some(container) = get_element_by_id(HISTORY_CONTAINER_ID) else {
            return;
        };
        let section = get_element_by_id(HISTORY_SECTION_ID);
        let ctx = Rc::clone(&self.ctx);

        spawn_local(async move {
            let view = HistoryView::from_fetch(fetch_history(&ctx).await);
            if let Err(e) = render_history(&container, section.as_ref(), &view) {
                log::error!("❌ [APP] Rendering history: {:?}", e);
            }
        });
    }

    fn mount_welcome(&self) -> Result<(), JsValue> {
        let Some(target) = get_element_by_id(WELCOME_ID) else {
            return Ok(());
        };
        let user = self.ctx.session.get_user();
        render_welcome(&target, &WelcomeView::from_profile(user.as_ref()))
    }

    fn mount_admin_bookings(&self) {
        let Some(container) = get_element_by_id(ADMIN_BOOKINGS_ID) else {
            return;
        };
        let ctx = Rc::clone(&self.ctx);

        spawn_local(async move {
            let view = AdminBookingsView::from_fetch(fetch_all_bookings(&ctx).await);
            if let Err(e) = render_admin_bookings(&container, &view) {
                log::error!("❌ [APP] Rendering admin bookings: {:?}", e);
            }
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
