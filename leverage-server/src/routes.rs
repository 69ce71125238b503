//! HTTP surface: diagnosis, analytics proxy, health.

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde_json::json;

use leverage_diagnostic::{diagnose, DetailAccess, RawBusinessMetrics};
use leverage_proxy::{AnalyticsProxy, ProxyRequest, ProxyResponse};

/// Header carrying the caller's account token for unlocking detailed plans.
pub const ACCOUNT_TOKEN_HEADER: &str = "x-account-token";
/// Header carrying the dashboard shared secret for the analytics proxy.
pub const DASHBOARD_TOKEN_HEADER: &str = "x-dashboard-token";

pub struct AppState {
    pub proxy: AnalyticsProxy,
    /// Tokens that unlock detailed plans. Empty means details stay locked.
    pub account_tokens: Vec<String>,
}

impl AppState {
    /// The caller-side access check for detailed plans.
    fn detail_access(&self, headers: &HeaderMap) -> DetailAccess {
        let token = headers
            .get(ACCOUNT_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|t| !t.is_empty());
        match token {
            Some(t) if self.account_tokens.iter().any(|known| known == t) => DetailAccess::Unlocked,
            _ => DetailAccess::Locked,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/diagnose", post(diagnose_handler))
        .route("/api/analytics", any(analytics_handler))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn diagnose_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let raw: RawBusinessMetrics = match serde_json::from_slice(&body) {
        Ok(raw) => raw,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("Invalid metrics payload: {}", e) })),
            )
                .into_response();
        }
    };

    let access = state.detail_access(&headers);
    let diagnosis = diagnose(&raw, access);
    log::info!(
        "POST /api/diagnose -> {} (details {})",
        diagnosis.constraint,
        if access == DetailAccess::Unlocked { "unlocked" } else { "locked" }
    );
    Json(diagnosis).into_response()
}

async fn analytics_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let dashboard_token = headers
        .get(DASHBOARD_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());

    let response = state
        .proxy
        .handle(ProxyRequest {
            method: method.as_str(),
            dashboard_token,
            body: &body,
        })
        .await;

    into_axum_response(response)
}

fn into_axum_response(proxied: ProxyResponse) -> Response {
    let status =
        StatusCode::from_u16(proxied.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = match proxied.body {
        Some(body) => (status, Json(body)).into_response(),
        None => (status, Body::empty()).into_response(),
    };

    let headers = response.headers_mut();
    for (name, value) in proxied.headers {
        match HeaderValue::from_str(&value) {
            Ok(value) => {
                headers.insert(HeaderName::from_static(name), value);
            }
            Err(_) => log::warn!("dropping invalid {} header value {:?}", name, value),
        }
    }
    response
}
