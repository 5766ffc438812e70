use crate::domain::ports::{HttpBackend, HttpRequest};
use crate::utils::error::{PokeApiError, Result};
use reqwest::Method;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;

/// Per-request settings. `timeout` bounds the whole exchange including the body read.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub timeout: Duration,
    pub method: Method,
    pub headers: HashMap<String, String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            method: Method::GET,
            headers: HashMap::new(),
        }
    }
}

impl RequestOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// Maps a non-2xx status onto the error taxonomy. This is the only place
/// status codes are inspected.
pub fn classify_status(status: u16, url: &str) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        404 => Err(PokeApiError::NotFound {
            url: url.to_string(),
        }),
        429 => Err(PokeApiError::RateLimited {
            url: url.to_string(),
        }),
        status => Err(PokeApiError::Http {
            status,
            url: url.to_string(),
        }),
    }
}

/// Whole milliseconds of a deadline, saturating at `u64::MAX`.
fn timeout_millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}

/// Issues one request and parses the body as JSON.
///
/// The deadline timer lives inside the `timeout` future, so it is released on
/// every exit path. On expiry the in-flight backend future is dropped, which
/// cancels the request.
pub async fn request_json<B>(
    backend: &B,
    url: &str,
    options: &RequestOptions,
) -> Result<serde_json::Value>
where
    B: HttpBackend + ?Sized,
{
    let request = HttpRequest {
        method: options.method.clone(),
        url: url.to_string(),
        headers: options.headers.clone(),
    };

    tracing::debug!("📡 {} {}", request.method, url);

    let response = match tokio::time::timeout(options.timeout, backend.execute(request)).await {
        Ok(outcome) => outcome?,
        Err(_) => {
            tracing::warn!("⏰ Request to {} exceeded {:?}", url, options.timeout);
            return Err(PokeApiError::Timeout {
                url: url.to_string(),
                timeout_ms: timeout_millis(options.timeout),
            });
        }
    };

    tracing::debug!("📡 {} responded with status {}", url, response.status);

    if let Err(e) = classify_status(response.status, url) {
        tracing::debug!("❌ {}", e);
        return Err(e);
    }

    let value = serde_json::from_slice(&response.body)?;
    Ok(value)
}
