//! Environment configuration for the catalog data source.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Base of the hosted REST endpoint, e.g. `https://<project>.supabase.co/rest/v1`.
    /// Unset means the fixture catalog is served instead.
    pub rest_url: Option<String>,
    pub api_key: Option<String>,
    pub fixture_path: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl StorefrontConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let request_timeout = match non_empty("STOREFRONT_REQUEST_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(ms.parse::<u64>().with_context(|| format!("STOREFRONT_REQUEST_TIMEOUT_MS is not a number: {ms}"))?),
            None => Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        };
        Ok(Self {
            rest_url: non_empty("STOREFRONT_REST_URL").map(|u| u.trim_end_matches('/').to_string()),
            api_key: non_empty("STOREFRONT_API_KEY"),
            fixture_path: non_empty("STOREFRONT_FIXTURE_PATH").map(PathBuf::from),
            request_timeout,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<StorefrontConfig> {
        let vars = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect::<HashMap<_, _>>();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_fixture_mode() {
        let c = config(&[]).unwrap();
        assert_eq!(c.rest_url, None);
        assert_eq!(c.request_timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn trims_trailing_slash_and_blank_values() {
        let c = config(&[("STOREFRONT_REST_URL", "https://example.supabase.co/rest/v1/"), ("STOREFRONT_API_KEY", "  ")]).unwrap();
        assert_eq!(c.rest_url.as_deref(), Some("https://example.supabase.co/rest/v1"));
        assert_eq!(c.api_key, None);
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(config(&[("STOREFRONT_REQUEST_TIMEOUT_MS", "soon")]).is_err());
        assert_eq!(config(&[("STOREFRONT_REQUEST_TIMEOUT_MS", "2500")]).unwrap().request_timeout, Duration::from_millis(2500));
    }
}
