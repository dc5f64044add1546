//! Browser transport using gloo_net (fetch API)

use gloo_net::http::{Request, RequestBuilder};

use crate::error::Result;
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method};

#[derive(Debug, Clone, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }

    fn build_request(request: &HttpRequest) -> RequestBuilder {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };

        for (name, value) in request.headers() {
            builder = builder.header(name, &value);
        }

        builder
    }
}

impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = Self::build_request(&request);

        let resp = match request.body {
            Some(body) => builder.body(body)?.send().await?,
            None => builder.send().await?,
        };

        let status = resp.status();
        log::debug!("🌐 [HTTP] {:?} {} -> {}", request.method, request.url, status);

        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
