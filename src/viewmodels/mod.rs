pub mod history_viewmodel;
pub mod admin_viewmodel;
pub mod profile_viewmodel;

pub use history_viewmodel::HistoryView;
pub use admin_viewmodel::AdminBookingsView;
pub use profile_viewmodel::{booking_prefill, WelcomeView};
