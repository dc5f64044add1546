// ============================================================================
// BIKE SERVICE CLIENT - browser client for the bike-service booking backend
// ============================================================================
// - Models: request payloads, loosely-typed server rows, pages
// - Services: REST calls + login/register/booking/history flows
// - State: session store (pluggable storage) + app context
// - ViewModels: what to render, decided without a DOM
// - Views / DOM: direct DOM mutation (wasm32 only)
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod utils;
#[cfg(target_arch = "wasm32")]
pub mod views;

pub use error::{ClientError, Result};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> core::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        let level = if config::CONFIG.is_production() { log::Level::Info } else { log::Level::Debug };
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    log::info!("🚀 Bike Service Client ({})", config::CONFIG.environment);

    dom::on_dom_ready(|| {
        if let Err(e) = app::App::new().mount() {
            log::error!("❌ [APP] Mount failed: {:?}", e);
        }
    })
}
