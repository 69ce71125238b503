use std::env;

/// Provider query endpoint used when `PLAUSIBLE_API_URL` is unset.
pub const DEFAULT_UPSTREAM_URL: &str = "https://plausible.io/api/v2/query";
/// Origin allowed by the CORS headers when `DASHBOARD_ALLOWED_ORIGIN` is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://scalyst.digital";

/// Server-held secrets and endpoints for the proxy.
///
/// Empty environment values count as unset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Shared secret the dashboard sends in `X-Dashboard-Token`.
    /// When unset every request is rejected.
    pub dashboard_password: Option<String>,
    /// Provider API key, sent upstream as a bearer token.
    pub api_key: Option<String>,
    pub upstream_url: String,
    pub allowed_origin: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            dashboard_password: None,
            api_key: None,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Read configuration from `DASHBOARD_PASSWORD`, `PLAUSIBLE_API_KEY`,
    /// `PLAUSIBLE_API_URL` and `DASHBOARD_ALLOWED_ORIGIN`.
    pub fn from_env() -> Self {
        Self {
            dashboard_password: non_empty_var("DASHBOARD_PASSWORD"),
            api_key: non_empty_var("PLAUSIBLE_API_KEY"),
            upstream_url: non_empty_var("PLAUSIBLE_API_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string()),
            allowed_origin: non_empty_var("DASHBOARD_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        }
    }

    /// True when `token` is present, non-empty and equal to the configured password.
    pub fn token_matches(&self, token: Option<&str>) -> bool {
        match (token, self.dashboard_password.as_deref()) {
            (Some(token), Some(password)) => !token.is_empty() && token == password,
            _ => false,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_password_rejects_everyone() {
        let config = ProxyConfig::default();
        assert!(!config.token_matches(None));
        assert!(!config.token_matches(Some("")));
        assert!(!config.token_matches(Some("anything")));
    }

    #[test]
    fn token_must_match_exactly() {
        let config = ProxyConfig {
            dashboard_password: Some("hunter2".into()),
            ..Default::default()
        };
        assert!(config.token_matches(Some("hunter2")));
        assert!(!config.token_matches(Some("Hunter2")));
        assert!(!config.token_matches(Some("hunter2 ")));
        assert!(!config.token_matches(None));
    }
}
