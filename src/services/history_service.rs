//! Read-only fetches behind the bearer token.
//!
//! Both helpers return `None` as the "no data" sentinel: no token stored,
//! HTTP failure, transport failure and unparseable bodies all look the same
//! to the caller.

use serde_json::Value;

use crate::models::{AdminBooking, HistoryEntry};
use crate::services::api_client::ApiReply;
use crate::services::http::HttpTransport;
use crate::state::{AppContext, KeyValueStore};

/// Service history of the logged-in user (`[...]` or `{history: [...]}`)
pub async fn fetch_history<T: HttpTransport, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
) -> Option<Vec<HistoryEntry>> {
    let token = ctx.session.get_auth().filter(|t| !t.is_empty())?;
    let body = successful_body(ctx.api.user_history(&token).await, "HISTORY")?;

    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("history") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    log::info!("📋 [HISTORY] {} entries", items.len());
    Some(items.into_iter().map(HistoryEntry::from_value).collect())
}

/// Every booking, for the admin dashboard (`[...]` or `{bookings: [...]}`)
pub async fn fetch_all_bookings<T: HttpTransport, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
) -> Option<Vec<AdminBooking>> {
    let token = ctx.session.get_auth().filter(|t| !t.is_empty())?;
    let body = successful_body(ctx.api.all_bookings(&token).await, "ADMIN")?;

    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut fields) => match fields.remove("bookings") {
            Some(Value::Array(items)) => items,
            _ => {
                log::warn!("⚠️ [ADMIN] Response has no bookings list");
                return None;
            }
        },
        _ => return None,
    };

    log::info!("📋 [ADMIN] {} bookings", items.len());
    Some(items.into_iter().map(AdminBooking::from_value).collect())
}

fn successful_body(result: crate::error::Result<ApiReply>, tag: &str) -> Option<Value> {
    match result {
        Ok(reply) if reply.ok => Some(reply.body),
        Ok(reply) => {
            log::warn!("⚠️ [{}] Fetch failed: HTTP {}", tag, reply.status);
            None
        }
        Err(e) => {
            log::error!("❌ [{}] Fetch error: {}", tag, e);
            None
        }
    }
}
