// ============================================================================
// STATE MODULE - session persistence + application context
// ============================================================================

pub mod session_store;
pub mod app_context;

pub use session_store::*;
pub use app_context::*;
