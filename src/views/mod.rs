// ============================================================================
// VIEWS - turn view models into DOM; no decisions made here
// ============================================================================

pub mod admin_bookings;
pub mod forms;
pub mod history;
pub mod logout;
pub mod welcome;

pub use admin_bookings::render_admin_bookings;
pub use forms::{wire_booking_form, wire_login_form, wire_register_form};
pub use history::render_history;
pub use logout::wire_logout_button;
pub use welcome::render_welcome;

use crate::dom::{alert, navigate};
use crate::services::FlowOutcome;

/// Show the notice, then follow the redirect if there is one
pub fn present(outcome: &FlowOutcome) {
    alert(&outcome.notice);
    if let Some(page) = outcome.redirect {
        navigate(page);
    }
}
