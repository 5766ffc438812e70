use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use std::collections::HashMap;

/// One outbound request as the transport hands it to a backend.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HashMap<String, String>,
}

/// A completed exchange: status plus the fully read body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP capability the transport runs on. Implementations perform a
/// single attempt and report connection-level failures as `Network` errors;
/// status codes are left for the transport to classify.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<B: HttpBackend + ?Sized> HttpBackend for std::sync::Arc<B> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request).await
    }
}
