use crate::models::{server_message, BookingRequest, Page};
use crate::services::http::HttpTransport;
use crate::services::outcome::FlowOutcome;
use crate::state::{AppContext, KeyValueStore};

/// Submit a service booking for the logged-in user.
///
/// Without a stored token nothing is sent and the user is sent to the login
/// page instead.
pub async fn submit_booking<T: HttpTransport, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
    request: BookingRequest,
) -> FlowOutcome {
    let Some(token) = ctx.session.get_auth().filter(|t| !t.is_empty()) else {
        log::info!("🔒 [BOOKING] No token, redirecting to login");
        return FlowOutcome::navigate("Please login to book an appointment", Page::Login);
    };

    match ctx.api.create_booking(&token, &request).await {
        Ok(reply) if reply.ok => {
            log::info!("✅ [BOOKING] Created (HTTP {})", reply.status);
            FlowOutcome::navigate("Booking created successfully", Page::Home)
        }
        Ok(reply) => {
            log::warn!("⚠️ [BOOKING] Rejected with HTTP {}", reply.status);
            FlowOutcome::stay(server_message(&reply.body).unwrap_or_else(|| "Booking failed".to_string()))
        }
        Err(e) => {
            log::error!("❌ [BOOKING] {}", e);
            FlowOutcome::stay("Network or server error")
        }
    }
}
