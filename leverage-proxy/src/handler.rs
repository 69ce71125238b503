//! Request handling for the analytics proxy.
//!
//! Framework-agnostic: the server hands in the method, the dashboard token
//! header and the raw body, and gets back a status, headers and an optional
//! JSON body. Checks run in a fixed order:
//! 1. `OPTIONS` -> 200, empty (CORS preflight)
//! 2. anything but `POST` -> 405
//! 3. token missing or wrong -> 401
//! 4. provider key missing -> 500
//! 5. body parse, normalize, forward
//!
//! CORS headers are attached to every response, errors included.

use serde_json::Value;

use crate::config::ProxyConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::protocol::AnalyticsRequest;
use crate::upstream::AnalyticsUpstream;

/// Shared cache directive on successful responses (5 minutes).
pub const SUCCESS_CACHE_CONTROL: &str = "s-maxage=300, stale-while-revalidate=60";
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, X-Dashboard-Token";

/// Incoming request, reduced to what the proxy reads.
#[derive(Clone, Copy, Debug)]
pub struct ProxyRequest<'a> {
    pub method: &'a str,
    pub dashboard_token: Option<&'a str>,
    pub body: &'a [u8],
}

/// Outgoing response. Header names are lowercase.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl ProxyResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

enum Outcome {
    Preflight,
    Data(Value),
}

/// The proxy: configuration plus an upstream to forward to.
pub struct AnalyticsProxy {
    config: ProxyConfig,
    upstream: Box<dyn AnalyticsUpstream>,
}

impl AnalyticsProxy {
    pub fn new(config: ProxyConfig, upstream: Box<dyn AnalyticsUpstream>) -> Self {
        Self { config, upstream }
    }

    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Handle one request. Never fails; errors become error responses.
    pub async fn handle(&self, request: ProxyRequest<'_>) -> ProxyResponse {
        let mut headers = vec![
            ("access-control-allow-origin", self.config.allowed_origin.clone()),
            ("access-control-allow-methods", ALLOWED_METHODS.to_string()),
            ("access-control-allow-headers", ALLOWED_HEADERS.to_string()),
        ];

        match self.process(&request).await {
            Ok(Outcome::Preflight) => ProxyResponse {
                status: 200,
                headers,
                body: None,
            },
            Ok(Outcome::Data(data)) => {
                headers.push(("cache-control", SUCCESS_CACHE_CONTROL.to_string()));
                ProxyResponse {
                    status: 200,
                    headers,
                    body: Some(data),
                }
            }
            Err(err) => {
                log::warn!("analytics proxy {} request failed: {}", request.method, err);
                ProxyResponse {
                    status: err.status(),
                    headers,
                    body: Some(err.to_body()),
                }
            }
        }
    }

    async fn process(&self, request: &ProxyRequest<'_>) -> ProxyResult<Outcome> {
        match request.method {
            "OPTIONS" => return Ok(Outcome::Preflight),
            "POST" => {}
            _ => return Err(ProxyError::MethodNotAllowed),
        }

        if !self.config.token_matches(request.dashboard_token) {
            return Err(ProxyError::Unauthorized);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ProxyError::MissingApiKey)?;

        let query = AnalyticsRequest::from_body(request.body)?.normalize();
        let reply = self.upstream.query(api_key, &query).await?;

        if !reply.is_success() {
            return Err(ProxyError::Upstream {
                status: reply.status,
                detail: reply.body,
            });
        }

        let data: Value = serde_json::from_str(&reply.body)?;
        log::info!("analytics proxy served query for site {}", query.site_id);
        Ok(Outcome::Data(data))
    }
}
