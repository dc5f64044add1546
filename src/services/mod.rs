pub mod http;
pub mod api_client;
pub mod outcome;
pub mod auth_service;
pub mod booking_service;
pub mod history_service;

#[cfg(target_arch = "wasm32")]
pub mod gloo_transport;

#[cfg(test)]
pub mod mock;

pub use api_client::{ApiClient, ApiReply};
pub use auth_service::{login, register, LoginMode};
pub use booking_service::submit_booking;
pub use history_service::{fetch_all_bookings, fetch_history};
pub use outcome::FlowOutcome;
