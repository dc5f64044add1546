// ============================================================================
// API CLIENT - HTTP only (stateless, no business logic)
// ============================================================================

use serde::Serialize;
use serde_json::Value;

use crate::config::CONFIG;
use crate::error::Result;
use crate::models::{BookingRequest, LoginRequest, RegisterRequest};
use crate::services::http::{HttpRequest, HttpTransport};

/// Status plus parsed JSON body of a backend call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub ok: bool,
    pub body: Value,
}

/// REST client for the booking backend
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_base_url(&CONFIG.api_base_url, transport)
    }

    pub fn with_base_url(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST /login/
    pub async fn login(&self, request: &LoginRequest) -> Result<ApiReply> {
        self.post_json("/login/", request, None).await
    }

    /// POST /register/
    pub async fn register(&self, request: &RegisterRequest) -> Result<ApiReply> {
        self.post_json("/register/", request, None).await
    }

    /// POST /bookings/
    pub async fn create_booking(&self, token: &str, request: &BookingRequest) -> Result<ApiReply> {
        log::info!("🏍️ [API] Creating booking for {} on {}", request.bike_model, request.service_date);
        self.post_json("/bookings/", request, Some(token)).await
    }

    /// GET /user/history/
    pub async fn user_history(&self, token: &str) -> Result<ApiReply> {
        self.get_json("/user/history/", token).await
    }

    /// GET /bookings/
    pub async fn all_bookings(&self, token: &str) -> Result<ApiReply> {
        self.get_json("/bookings/", token).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B, token: Option<&str>) -> Result<ApiReply> {
        let mut request = HttpRequest::post(self.url(path), serde_json::to_string(body)?);
        if let Some(token) = token {
            request = request.bearer(token);
        }
        self.execute(request).await
    }

    async fn get_json(&self, path: &str, token: &str) -> Result<ApiReply> {
        self.execute(HttpRequest::get(self.url(path)).bearer(token)).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<ApiReply> {
        let path = request.url.trim_start_matches(&self.base_url).to_string();
        let response = self.transport.send(request).await?;
        log::info!("📡 [API] {} -> HTTP {}", path, response.status);

        let body = response.json()?;
        log::debug!("📡 [API] {} body: {}", path, body);

        Ok(ApiReply {
            status: response.status,
            ok: response.ok(),
            body,
        })
    }
}
