//! Transport seam between the REST client and whatever actually sends bytes.
//!
//! The browser build plugs in `GlooTransport` (fetch API through gloo-net);
//! tests plug in `services::mock::MockTransport`.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, PartialEq, Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            bearer: None,
            body: None,
        }
    }

    pub fn post(url: String, body: String) -> Self {
        Self {
            method: Method::Post,
            url,
            bearer: None,
            body: Some(body),
        }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    /// Headers every transport must send with this request
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = Vec::new();
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_string()));
        }
        if let Some(token) = &self.bearer {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Sends one request and hands back the raw status and body
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_range() {
        let resp = |status| HttpResponse { status, body: String::new() };
        assert!(resp(200).ok());
        assert!(resp(201).ok());
        assert!(!resp(199).ok());
        assert!(!resp(300).ok());
        assert!(!resp(401).ok());
    }

    #[test]
    fn test_json_rejects_html() {
        let resp = HttpResponse { status: 500, body: "<html>oops</html>".into() };
        assert!(matches!(resp.json(), Err(crate::error::ClientError::Decode(_))));
    }

    #[test]
    fn test_headers_for_authorized_post() {
        let request = HttpRequest::post("http://api.test/api/bookings/".into(), "{}".into()).bearer("tok");
        assert_eq!(
            request.headers(),
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer tok".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_get_has_no_headers() {
        assert!(HttpRequest::get("http://api.test/api/bookings/".into()).headers().is_empty());
        let get = HttpRequest::get("http://api.test/api/user/history/".into()).bearer("tok");
        assert_eq!(get.headers(), vec![("Authorization", "Bearer tok".to_string())]);
    }
}
