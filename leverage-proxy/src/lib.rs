//! Analytics proxy for the metrics dashboard.
//!
//! Keeps the provider API key server-side. The dashboard authenticates with
//! a shared secret header; valid queries are normalized and forwarded with
//! the key as a bearer token, and the provider's answer is relayed back.

pub mod config;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod upstream;

pub use config::ProxyConfig;
pub use error::{ProxyError, ProxyResult};
pub use handler::{AnalyticsProxy, ProxyRequest, ProxyResponse};
pub use protocol::{AnalyticsQuery, AnalyticsRequest};
pub use upstream::{AnalyticsUpstream, PlausibleClient, UpstreamReply};
