//! Configuration types for Global Catalog client construction.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use global_catalog_api_v1::{RetryPolicy, DEFAULT_SERVICE_URL};
use url::Url;

use crate::auth::Authenticator;
use crate::error::GlobalCatalogError;

/// Name used to look up external configuration, see
/// [GlobalCatalogConfig::from_external].
pub const DEFAULT_SERVICE_NAME: &str = "global_catalog";

/// Configuration for Global Catalog client construction.
#[derive(Debug, Clone)]
pub struct GlobalCatalogConfig {
    /// Base URL for the Global Catalog API.
    pub service_url: String,
    pub authenticator: Authenticator,
    /// Additional headers to include in every request.
    pub default_headers: BTreeMap<String, String>,
    pub user_agent: Option<String>,
    pub connect_timeout: Duration,
    /// Timeout of a whole request, including reading the response body.
    pub timeout: Duration,
    /// Retry failed requests, or not at all for `None`.
    pub retries: Option<RetryPolicy>,
    pub disable_ssl_verification: bool,
    /// Mock mode for testing.
    pub mock_mode: GlobalCatalogMockMode,
}

impl Default for GlobalCatalogConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            authenticator: Authenticator::NoAuth,
            default_headers: BTreeMap::new(),
            user_agent: None,
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
            retries: None,
            disable_ssl_verification: false,
            mock_mode: GlobalCatalogMockMode::None,
        }
    }
}

impl GlobalCatalogConfig {
    pub fn new(authenticator: Authenticator) -> Self {
        Self {
            authenticator,
            ..Default::default()
        }
    }

    /// Check the service URL and credentials,
    /// returning the URL to send requests to.
    pub fn validate(&self) -> Result<Url, GlobalCatalogError> {
        self.authenticator.validate()?;
        parse_service_url(&self.service_url)
    }
}

/// Parse an absolute http(s) service URL, without a trailing slash.
///
/// URLs copied from documentation often still contain `{placeholders}`,
/// which are rejected.
pub(crate) fn parse_service_url(service_url: &str) -> Result<Url, GlobalCatalogError> {
    let trimmed = service_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(GlobalCatalogError::Config(
            "service URL must not be empty".to_string(),
        ));
    }
    if trimmed.contains(['{', '}']) {
        return Err(GlobalCatalogError::Config(format!(
            "service URL '{trimmed}' contains unresolved placeholders"
        )));
    }
    let url = Url::parse(trimmed).map_err(|e| {
        GlobalCatalogError::Config(format!("invalid service URL '{trimmed}': {e}"))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(GlobalCatalogError::Config(format!(
            "service URL '{trimmed}' must use http or https"
        )));
    }
    Ok(url)
}

/// Mock recording/replay mode for integration testing.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum GlobalCatalogMockMode {
    /// Use a real server without any mock recording or replaying.
    #[default]
    None,
    /// Proxy via a mock server and record interactions to a path.
    Record(PathBuf),
    /// Replay interactions from a path using a mock server.
    Replay(PathBuf),
}
