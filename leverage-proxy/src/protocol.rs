//! Dashboard query parsing and normalization.
//!
//! The dashboard sends a loose JSON body; the provider wants a complete
//! query. Values are opaque JSON and are forwarded as-is. Missing pieces are
//! filled with defaults using the dashboard's own notion of "missing":
//! `null`, `false`, `0` and `""` all count as absent, while an empty array or
//! object does not.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ProxyError, ProxyResult};

pub const DEFAULT_SITE_ID: &str = "scalyst.digital";
pub const DEFAULT_METRICS: [&str; 2] = ["visitors", "pageviews"];
pub const DEFAULT_DATE_RANGE: &str = "30d";

/// Body posted by the dashboard. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalyticsRequest {
    #[serde(default)]
    pub site_id: Option<Value>,
    #[serde(default)]
    pub metrics: Option<Value>,
    #[serde(default)]
    pub date_range: Option<Value>,
    #[serde(default)]
    pub dimensions: Option<Value>,
    #[serde(default)]
    pub filters: Option<Value>,
    #[serde(default)]
    pub order_by: Option<Value>,
    #[serde(default)]
    pub limit: Option<Value>,
}

/// Query forwarded to the provider.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalyticsQuery {
    pub site_id: Value,
    pub metrics: Value,
    pub date_range: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<Value>,
}

impl AnalyticsRequest {
    /// Parse a raw request body. Only a JSON object is a valid request;
    /// arrays would otherwise bind to fields by position.
    pub fn from_body(body: &[u8]) -> ProxyResult<Self> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(ProxyError::Internal(
                "request body must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Fill defaults and drop absent optional clauses.
    pub fn normalize(self) -> AnalyticsQuery {
        AnalyticsQuery {
            site_id: truthy(self.site_id).unwrap_or_else(|| json!(DEFAULT_SITE_ID)),
            metrics: truthy(self.metrics).unwrap_or_else(|| json!(DEFAULT_METRICS)),
            date_range: truthy(self.date_range).unwrap_or_else(|| json!(DEFAULT_DATE_RANGE)),
            dimensions: truthy(self.dimensions),
            filters: truthy(self.filters),
            order_by: truthy(self.order_by),
            limit: truthy(self.limit),
        }
    }
}

/// Whether a value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}
