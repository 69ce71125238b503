use async_trait::async_trait;

use crate::error::ProxyResult;
use crate::protocol::AnalyticsQuery;

/// Raw reply from the provider: status and body text, uninterpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The analytics provider's query API.
///
/// Transport failures are errors; any HTTP response, successful or not, is
/// an `Ok` reply for the proxy to interpret.
#[async_trait]
pub trait AnalyticsUpstream: Send + Sync {
    async fn query(&self, api_key: &str, query: &AnalyticsQuery) -> ProxyResult<UpstreamReply>;
}

/// Production upstream backed by `reqwest`.
pub struct PlausibleClient {
    client: reqwest::Client,
    url: String,
}

impl PlausibleClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl AnalyticsUpstream for PlausibleClient {
    async fn query(&self, api_key: &str, query: &AnalyticsQuery) -> ProxyResult<UpstreamReply> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(query)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(UpstreamReply { status, body })
    }
}
