//! Global Catalog client wrapper around the low level API client.

use std::cmp::min;
use std::fmt::Debug;
use std::future::{ready, Future};
use std::num::NonZeroU32;
use std::str::FromStr;
#[cfg(feature = "mock")]
use std::sync::Arc;

use async_stream::try_stream;
use futures::stream::Stream;
use futures::{StreamExt, TryStreamExt};
use global_catalog_api_v1::types::{self as api_types};
use global_catalog_api_v1::{Client as APIClient, RetryPolicy};
use reqwest::header::{self, HeaderMap};
use tracing::{debug, instrument};

#[cfg(not(feature = "mock"))]
use crate::config::GlobalCatalogMockMode;
use crate::config::{parse_service_url, GlobalCatalogConfig};
use crate::error::{ArtifactError, EntryError, GlobalCatalogError};
#[cfg(feature = "mock")]
use crate::mock::MockGuard;
use crate::models::*;
use crate::MapApiErrorExt;

/// A client for the Global Catalog.
///
/// This is a wrapper around the low level [APIClient] that handles:
/// - HTTP client configuration with timeouts and default headers
/// - authentication and retries
/// - mock server recording/replay for testing (feature-gated)
#[derive(Clone)]
pub struct GlobalCatalogClient {
    client: APIClient,
    config: GlobalCatalogConfig,

    #[cfg(feature = "mock")]
    _mock_guard: Option<Arc<MockGuard>>,
}

impl Debug for GlobalCatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalCatalogClient")
            .field("service_url", &self.config.service_url)
            .field("auth_type", &self.config.authenticator.auth_type())
            .finish_non_exhaustive()
    }
}

impl GlobalCatalogClient {
    /// Create a new client from configuration.
    pub fn new(config: GlobalCatalogConfig) -> Result<Self, GlobalCatalogError> {
        let service_url = config.validate()?;

        // create a mock server if configured
        #[cfg(feature = "mock")]
        let mock_guard = MockGuard::new(&config.mock_mode, &service_url).map(Arc::new);
        #[cfg(feature = "mock")]
        let effective_url = match mock_guard {
            Some(ref mock) => mock.url(&service_url),
            None => service_url.to_string(),
        };
        #[cfg(not(feature = "mock"))]
        let effective_url = match config.mock_mode {
            GlobalCatalogMockMode::None => service_url.to_string(),
            _ => {
                return Err(GlobalCatalogError::Config(
                    "mock mode requires the 'mock' feature".to_string(),
                ));
            },
        };

        let http_client = build_http_client(&config)?;
        let client = APIClient::new_with_client(&effective_url, http_client)
            .with_hook(std::sync::Arc::new(config.authenticator.clone()))
            .with_retry_policy(config.retries);

        Ok(Self {
            client,
            config,
            #[cfg(feature = "mock")]
            _mock_guard: mock_guard,
        })
    }

    /// Access the underlying API client for making requests.
    pub fn api(&self) -> &APIClient {
        &self.client
    }

    pub fn config(&self) -> &GlobalCatalogConfig {
        &self.config
    }

    /// Get the configured service URL.
    pub fn service_url(&self) -> &str {
        &self.config.service_url
    }

    /// Send subsequent requests to a different service URL.
    pub fn set_service_url(&mut self, service_url: &str) -> Result<(), GlobalCatalogError> {
        parse_service_url(service_url)?;
        self.update_config(|config| config.service_url = service_url.to_string())
    }

    /// Retry failed requests according to `policy`.
    pub fn enable_retries(&mut self, policy: RetryPolicy) {
        self.config.retries = Some(policy);
        self.client.set_retry_policy(Some(policy));
    }

    pub fn disable_retries(&mut self) {
        self.config.retries = None;
        self.client.set_retry_policy(None);
    }

    /// Clear mock recording state if in recording mode.
    ///
    /// Useful in tests where setup operations should not be captured.
    #[cfg(feature = "mock")]
    pub fn reset_recording(&mut self) {
        if let Some(guard) = self._mock_guard.as_mut().and_then(Arc::get_mut) {
            guard.reset_recording();
        }
    }

    /// Update the client configuration and recreate the client.
    pub fn update_config(
        &mut self,
        update: impl FnOnce(&mut GlobalCatalogConfig),
    ) -> Result<(), GlobalCatalogError> {
        let mut modified_config = self.config.clone();
        update(&mut modified_config);
        *self = Self::new(modified_config)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GlobalCatalog trait
// ---------------------------------------------------------------------------

/// Largest page the API returns for listings.
const RESPONSE_PAGE_SIZE: NonZeroU32 = NonZeroU32::new(200).unwrap();

/// The Global Catalog operations.
///
/// This trait enables alternate implementations, e.g. canned responses in
/// tests of code that uses the catalog.
#[allow(async_fn_in_trait)]
pub trait GlobalCatalog {
    /// List parent catalog entries, collecting up to `limit` results across
    /// pages. `offset` and `limit` of the options are ignored.
    async fn list_entries(
        &self,
        options: api_types::ListCatalogEntriesOptions,
        limit: ListLimit,
    ) -> Result<CatalogEntries, GlobalCatalogError>;

    /// List the children of an entry, collecting up to `limit` results.
    async fn child_objects(
        &self,
        options: api_types::GetChildObjectsOptions,
        limit: ListLimit,
    ) -> Result<CatalogEntries, EntryError>;

    /// Get the audit log of an entry, collecting up to `limit` results.
    async fn audit_logs(
        &self,
        options: api_types::GetAuditLogsOptions,
        limit: ListLimit,
    ) -> Result<AuditLog, EntryError>;

    async fn entry(
        &self,
        options: api_types::GetCatalogEntryOptions,
    ) -> Result<CatalogEntry, EntryError>;

    async fn create_entry(
        &self,
        options: api_types::CreateCatalogEntryOptions,
    ) -> Result<CatalogEntry, GlobalCatalogError>;

    /// Update an entry, usually with a body created from a fetched entry by
    /// [entry_to_prototype].
    async fn update_entry(
        &self,
        options: api_types::UpdateCatalogEntryOptions,
    ) -> Result<CatalogEntry, EntryError>;

    async fn delete_entry(
        &self,
        options: api_types::DeleteCatalogEntryOptions,
    ) -> Result<(), EntryError>;

    async fn restore_entry(
        &self,
        options: api_types::RestoreCatalogEntryOptions,
    ) -> Result<(), EntryError>;

    async fn visibility(
        &self,
        options: api_types::GetVisibilityOptions,
    ) -> Result<api_types::Visibility, EntryError>;

    async fn set_visibility(
        &self,
        options: api_types::UpdateVisibilityOptions,
    ) -> Result<(), EntryError>;

    async fn pricing(
        &self,
        options: api_types::GetPricingOptions,
    ) -> Result<api_types::PricingGet, EntryError>;

    async fn pricing_deployments(
        &self,
        options: api_types::GetPricingDeploymentsOptions,
    ) -> Result<api_types::PricingSearchResult, EntryError>;

    async fn artifacts(
        &self,
        options: api_types::ListArtifactsOptions,
    ) -> Result<api_types::Artifacts, ArtifactError>;

    /// Download the content of an artifact.
    async fn download_artifact(
        &self,
        options: api_types::GetArtifactOptions,
    ) -> Result<Vec<u8>, ArtifactError>;

    async fn upload_artifact(
        &self,
        options: api_types::UploadArtifactOptions,
    ) -> Result<(), ArtifactError>;

    async fn delete_artifact(
        &self,
        options: api_types::DeleteArtifactOptions,
    ) -> Result<(), ArtifactError>;
}

// ---------------------------------------------------------------------------
// GlobalCatalog implementation for GlobalCatalogClient
// ---------------------------------------------------------------------------

impl GlobalCatalog for GlobalCatalogClient {
    #[instrument(skip_all, fields(q = options.q))]
    async fn list_entries(
        &self,
        options: api_types::ListCatalogEntriesOptions,
        limit: ListLimit,
    ) -> Result<CatalogEntries, GlobalCatalogError> {
        debug!(?limit, "listing catalog entries");
        let options = &options;
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let mut options = options.clone();
                options.offset = Some(offset);
                options.limit = Some(page_size);
                let page = self
                    .client
                    .list_catalog_entries(&options)
                    .await
                    .map_api_error()
                    .await?
                    .into_inner();
                Ok::<_, GlobalCatalogError>((page.count, page.resources))
            },
            page_size(limit),
        );

        let (count, results) = collect_results(stream, limit).await?;
        debug!(n_results = results.len(), ?count, "received catalog entries");
        Ok(ResultsPage { results, count })
    }

    #[instrument(skip_all, fields(id = options.id, kind = options.kind))]
    async fn child_objects(
        &self,
        options: api_types::GetChildObjectsOptions,
        limit: ListLimit,
    ) -> Result<CatalogEntries, EntryError> {
        let options = &options;
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let mut options = options.clone();
                options.offset = Some(offset);
                options.limit = Some(page_size);
                let page = self
                    .client
                    .get_child_objects(&options)
                    .await
                    .map_api_error()
                    .await?
                    .into_inner();
                Ok::<_, EntryError>((page.count, page.resources))
            },
            page_size(limit),
        );

        let (count, results) = collect_results(stream, limit).await?;
        Ok(ResultsPage { results, count })
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn audit_logs(
        &self,
        options: api_types::GetAuditLogsOptions,
        limit: ListLimit,
    ) -> Result<AuditLog, EntryError> {
        let options = &options;
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let mut options = options.clone();
                options.offset = Some(offset);
                options.limit = Some(page_size);
                let page = self
                    .client
                    .get_audit_logs(&options)
                    .await
                    .map_api_error()
                    .await?
                    .into_inner();
                Ok::<_, EntryError>((page.count, page.resources))
            },
            page_size(limit),
        );

        let (count, results) = collect_results(stream, limit).await?;
        Ok(ResultsPage { results, count })
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn entry(
        &self,
        options: api_types::GetCatalogEntryOptions,
    ) -> Result<CatalogEntry, EntryError> {
        let response = self
            .client
            .get_catalog_entry(&options)
            .await
            .map_api_error()
            .await?;
        Ok(response.into_inner())
    }

    #[instrument(skip_all, fields(name = options.entry.name, kind = options.entry.kind))]
    async fn create_entry(
        &self,
        options: api_types::CreateCatalogEntryOptions,
    ) -> Result<CatalogEntry, GlobalCatalogError> {
        let entry = self
            .client
            .create_catalog_entry(&options)
            .await
            .map_api_error()
            .await?
            .into_inner();
        debug!(id = entry.id, "created catalog entry");
        Ok(entry)
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn update_entry(
        &self,
        options: api_types::UpdateCatalogEntryOptions,
    ) -> Result<CatalogEntry, EntryError> {
        let response = self
            .client
            .update_catalog_entry(&options)
            .await
            .map_api_error()
            .await?;
        Ok(response.into_inner())
    }

    #[instrument(skip_all, fields(id = options.id, force = options.force))]
    async fn delete_entry(
        &self,
        options: api_types::DeleteCatalogEntryOptions,
    ) -> Result<(), EntryError> {
        self.client
            .delete_catalog_entry(&options)
            .await
            .map_api_error()
            .await?;
        debug!("deleted catalog entry");
        Ok(())
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn restore_entry(
        &self,
        options: api_types::RestoreCatalogEntryOptions,
    ) -> Result<(), EntryError> {
        self.client
            .restore_catalog_entry(&options)
            .await
            .map_api_error()
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn visibility(
        &self,
        options: api_types::GetVisibilityOptions,
    ) -> Result<api_types::Visibility, EntryError> {
        self.client
            .get_visibility(&options)
            .await
            .map_api_error()
            .await
            .map(|res| res.into_inner())
            .map_err(EntryError::from)
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn set_visibility(
        &self,
        options: api_types::UpdateVisibilityOptions,
    ) -> Result<(), EntryError> {
        self.client
            .update_visibility(&options)
            .await
            .map_api_error()
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn pricing(
        &self,
        options: api_types::GetPricingOptions,
    ) -> Result<api_types::PricingGet, EntryError> {
        self.client
            .get_pricing(&options)
            .await
            .map_api_error()
            .await
            .map(|res| res.into_inner())
            .map_err(EntryError::from)
    }

    #[instrument(skip_all, fields(id = options.id))]
    async fn pricing_deployments(
        &self,
        options: api_types::GetPricingDeploymentsOptions,
    ) -> Result<api_types::PricingSearchResult, EntryError> {
        self.client
            .get_pricing_deployments(&options)
            .await
            .map_api_error()
            .await
            .map(|res| res.into_inner())
            .map_err(EntryError::from)
    }

    #[instrument(skip_all, fields(object_id = options.object_id))]
    async fn artifacts(
        &self,
        options: api_types::ListArtifactsOptions,
    ) -> Result<api_types::Artifacts, ArtifactError> {
        self.client
            .list_artifacts(&options)
            .await
            .map_api_error()
            .await
            .map(|res| res.into_inner())
            .map_err(ArtifactError::from)
    }

    #[instrument(skip_all, fields(object_id = options.object_id, artifact_id = options.artifact_id))]
    async fn download_artifact(
        &self,
        options: api_types::GetArtifactOptions,
    ) -> Result<Vec<u8>, ArtifactError> {
        let body = self
            .client
            .get_artifact(&options)
            .await
            .map_api_error()
            .await?
            .into_inner();
        debug!(size = body.len(), "downloaded artifact");
        Ok(body)
    }

    #[instrument(skip_all, fields(object_id = options.object_id, artifact_id = options.artifact_id))]
    async fn upload_artifact(
        &self,
        options: api_types::UploadArtifactOptions,
    ) -> Result<(), ArtifactError> {
        debug!(size = options.artifact.len(), "uploading artifact");
        self.client
            .upload_artifact(&options)
            .await
            .map_api_error()
            .await?;
        Ok(())
    }

    #[instrument(skip_all, fields(object_id = options.object_id, artifact_id = options.artifact_id))]
    async fn delete_artifact(
        &self,
        options: api_types::DeleteArtifactOptions,
    ) -> Result<(), ArtifactError> {
        self.client
            .delete_artifact(&options)
            .await
            .map_api_error()
            .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn page_size(limit: ListLimit) -> NonZeroU32 {
    min(limit.unwrap_or(RESPONSE_PAGE_SIZE), RESPONSE_PAGE_SIZE)
}

/// Collects a stream of results into a container, returning the total count.
async fn collect_results<T, E>(
    stream: impl Stream<Item = Result<StreamItem<T>, E>>,
    limit: ListLimit,
) -> Result<(ResultCount, Vec<T>), E> {
    let mut count = None;
    let actual_limit = if let Some(checked_limit) = limit {
        checked_limit.get() as usize
    } else {
        usize::MAX
    };
    let results = stream
        .try_filter_map(|item| {
            let new_item = match item {
                StreamItem::TotalCount(total) => {
                    count = Some(total);
                    None
                },
                StreamItem::Result(res) => Some(res),
            };
            ready(Ok(new_item))
        })
        .take(actual_limit)
        .try_collect::<Vec<_>>()
        .await?;
    Ok((count, results))
}

#[derive(Debug, Clone, PartialEq)]
enum StreamItem<T> {
    TotalCount(u64),
    Result(T),
}

impl<T> From<T> for StreamItem<T> {
    fn from(value: T) -> Self {
        Self::Result(value)
    }
}

/// Create a depaging stream from a page-fetching function.
///
/// Takes a function that returns `(total_count, items)` for a given
/// `(offset, page_size)`, and yields `TotalCount` once followed by all
/// `Result` items across pages.
fn make_depaging_stream<T, E, Fut>(
    generator: impl Fn(i64, i64) -> Fut,
    page_size: NonZeroU32,
) -> impl Stream<Item = Result<StreamItem<T>, E>>
where
    Fut: Future<Output = Result<(i64, Vec<T>), E>>,
{
    try_stream! {
        let page_size = i64::from(page_size.get());
        let mut offset = 0;
        let mut total_count_yielded = false;

        loop {
            let (total_count, results) = generator(offset, page_size).await?;

            let items_on_page = results.len() as i64;

            if !total_count_yielded {
                yield StreamItem::TotalCount(total_count.max(0) as u64);
                total_count_yielded = true;
            }

            for result in results {
                yield StreamItem::Result(result)
            }

            offset += items_on_page;
            if items_on_page < page_size || offset >= total_count {
                break;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP client builder
// ---------------------------------------------------------------------------

/// Build the HTTP client with default headers, user agent and timeouts.
fn build_http_client(config: &GlobalCatalogConfig) -> Result<reqwest::Client, GlobalCatalogError> {
    let mut headers = HeaderMap::new();

    for (key, value) in &config.default_headers {
        headers.insert(
            header::HeaderName::from_str(key).map_err(
                |e: reqwest::header::InvalidHeaderName| GlobalCatalogError::Config(e.to_string()),
            )?,
            header::HeaderValue::from_str(value).map_err(
                |e: reqwest::header::InvalidHeaderValue| GlobalCatalogError::Config(e.to_string()),
            )?,
        );
    }

    debug!(
        service_url = %config.service_url,
        auth_type = config.authenticator.auth_type(),
        default_headers = config.default_headers.len(),
        retries = ?config.retries,
        "building global catalog HTTP client"
    );

    let user_agent = config.user_agent.clone().unwrap_or_else(|| {
        format!("global-catalog-rust/{}", env!("CARGO_PKG_VERSION"))
    });

    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(user_agent)
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(config.disable_ssl_verification)
        .build()
        .map_err(|e| GlobalCatalogError::Other(e.to_string()))
}

#[cfg(test)]
pub mod tests {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use global_catalog_api_v1::mock::MockServerExt;
    use global_catalog_api_v1::types::*;
    use global_catalog_api_v1::Error as APIError;
    use httpmock::MockServer;
    use itertools::Itertools;
    use proptest::prelude::*;
    use proptest::proptest;
    use serde_json::json;

    use super::*;
    use crate::auth::Authenticator;

    fn client_config(url: &str) -> GlobalCatalogConfig {
        GlobalCatalogConfig {
            service_url: url.to_string(),
            ..Default::default()
        }
    }

    fn client(server: &MockServer) -> GlobalCatalogClient {
        GlobalCatalogClient::new(client_config(&server.base_url())).unwrap()
    }

    fn entry(id: usize) -> CatalogEntry {
        CatalogEntry {
            id: Some(format!("entry-{id}")),
            name: Some(format!("entry{id}")),
            kind: Some(CatalogEntryKind::SERVICE.to_string()),
            ..Default::default()
        }
    }

    fn search_result(offset: usize, count: usize, ids: impl Iterator<Item = usize>) -> EntrySearchResult {
        let resources = ids.map(entry).collect::<Vec<_>>();
        EntrySearchResult {
            offset: offset as i64,
            limit: resources.len() as i64,
            count: count as i64,
            resource_count: resources.len() as i64,
            resources,
            ..Default::default()
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = GlobalCatalogClient::new(client_config("https://{region}.example.com")).unwrap_err();
        assert!(matches!(err, GlobalCatalogError::Config(_)));
    }

    #[cfg(not(feature = "mock"))]
    #[test]
    fn mock_mode_requires_feature() {
        let config = GlobalCatalogConfig {
            mock_mode: GlobalCatalogMockMode::Replay("recording.yaml".into()),
            ..client_config("https://example.com/api/v1")
        };
        let err = GlobalCatalogClient::new(config).unwrap_err();
        assert!(matches!(err, GlobalCatalogError::Config(_)));
    }

    #[tokio::test]
    async fn default_headers_and_user_agent_set_on_all_requests() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.header("x-test", "test-value")
                .header("x-test2", "test-value2")
                .header("user-agent", "my-agent");
            then.status(200).json_body(json!({ "id": "entry" }));
        });

        let config = GlobalCatalogConfig {
            default_headers: BTreeMap::from([
                ("x-test".to_string(), "test-value".to_string()),
                ("x-test2".to_string(), "test-value2".to_string()),
            ]),
            user_agent: Some("my-agent".to_string()),
            ..client_config(&server.base_url())
        };
        let client = GlobalCatalogClient::new(config).unwrap();
        client
            .entry(GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn authenticator_sets_authorization_header() {
        let server = MockServer::start_async().await;
        let mock = server.get_catalog_entry(|when, then| {
            when.id("entry")
                .into_inner()
                .header("authorization", "Bearer my-token");
            then.ok(&entry(1));
        });

        let config = GlobalCatalogConfig {
            authenticator: Authenticator::bearer_token("my-token").unwrap(),
            ..client_config(&server.base_url())
        };
        let client = GlobalCatalogClient::new(config).unwrap();
        let found = client
            .entry(GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap();
        assert_eq!(found, entry(1));
        mock.assert();
    }

    #[tokio::test]
    async fn service_url_path_is_kept() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.path("/api/v1/entry/visibility");
            then.status(200).json_body(json!({ "restrictions": "public" }));
        });

        let mut client = client(&server);
        client
            .set_service_url(&format!("{}/api/v1/", server.base_url()))
            .unwrap();
        let visibility = client
            .visibility(GetVisibilityOptions::new("entry"))
            .await
            .unwrap();
        assert_eq!(visibility.restrictions.as_deref(), Some("public"));
        mock.assert();

        assert!(client.set_service_url("not a url").is_err());
    }

    #[tokio::test]
    async fn list_entries_collects_all_pages() {
        let server = MockServer::start_async().await;
        let first = server.list_catalog_entries(|when, then| {
            when.offset(0_i64).limit(200_i64);
            then.ok(&search_result(0, 250, 0..200));
        });
        let second = server.list_catalog_entries(|when, then| {
            when.offset(200_i64).limit(200_i64);
            then.ok(&search_result(200, 250, 200..250));
        });

        let entries = client(&server)
            .list_entries(ListCatalogEntriesOptions::new(), None)
            .await
            .unwrap();

        assert_eq!(entries.count, Some(250));
        assert_eq!(entries.results.len(), 250);
        assert_eq!(entries.results[249], entry(249));
        first.assert();
        second.assert();
    }

    #[tokio::test]
    async fn list_entries_respects_limit() {
        let server = MockServer::start_async().await;
        let mock = server.list_catalog_entries(|when, then| {
            when.q("kind:service").offset(0_i64).limit(5_i64);
            then.ok(&search_result(0, 100, 0..5));
        });

        let entries = client(&server)
            .list_entries(
                ListCatalogEntriesOptions::new().with_q("kind:service"),
                NonZeroU32::new(5),
            )
            .await
            .unwrap();

        assert_eq!(entries.count, Some(100));
        assert_eq!(entries.results.len(), 5);
        // the limit was reached with the first page
        mock.assert_hits(1);
    }

    #[tokio::test]
    async fn child_objects_and_audit_logs_are_depaged() {
        let server = MockServer::start_async().await;
        let children = server.get_child_objects(|when, then| {
            when.id("parent").kind("plan").offset(0_i64);
            then.ok(&search_result(0, 2, 0..2));
        });
        let logs = server.get_audit_logs(|when, then| {
            when.id("parent").ascending("true").offset(0_i64);
            then.ok(&AuditSearchResult {
                count: 1,
                resources: vec![Message {
                    id: Some("log-1".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            });
        });
        let client = client(&server);

        let entries = client
            .child_objects(GetChildObjectsOptions::new("parent", "plan"), None)
            .await
            .unwrap();
        assert_eq!(entries.results, vec![entry(0), entry(1)]);

        let log = client
            .audit_logs(GetAuditLogsOptions::new("parent").with_ascending(true), None)
            .await
            .unwrap();
        assert_eq!(log.count, Some(1));
        assert_eq!(log.results[0].id.as_deref(), Some("log-1"));

        children.assert();
        logs.assert();
    }

    #[tokio::test]
    async fn create_update_delete_restore() {
        let server = MockServer::start_async().await;
        let prototype = CatalogEntryPrototype {
            name: "entry1".to_string(),
            kind: CatalogEntryKind::SERVICE.to_string(),
            images: Image {
                image: "https://example.com/icon.svg".to_string(),
                ..Default::default()
            },
            provider: Provider {
                email: "me@example.com".to_string(),
                name: "me".to_string(),
                ..Default::default()
            },
            id: Some("entry-1".to_string()),
            ..Default::default()
        };

        let create = server.create_catalog_entry(|when, then| {
            when.body(&prototype);
            then.created(&entry(1));
        });
        let update = server.update_catalog_entry(|when, then| {
            when.id("entry-1").move_("new-parent");
            then.ok(&entry(1));
        });
        let delete = server.delete_catalog_entry(|when, then| {
            when.id("entry-1").force(true);
            then.ok();
        });
        let restore = server.restore_catalog_entry(|when, then| {
            when.id("entry-1");
            then.no_content();
        });
        let client = client(&server);

        let created = client
            .create_entry(CreateCatalogEntryOptions::new(prototype.clone()))
            .await
            .unwrap();
        let updated = client
            .update_entry(
                UpdateCatalogEntryOptions::new("entry-1", prototype).with_move("new-parent"),
            )
            .await
            .unwrap();
        assert_eq!(created, updated);
        client
            .delete_entry(DeleteCatalogEntryOptions::new("entry-1").with_force(true))
            .await
            .unwrap();
        client
            .restore_entry(RestoreCatalogEntryOptions::new("entry-1"))
            .await
            .unwrap();

        create.assert();
        update.assert();
        delete.assert();
        restore.assert();
    }

    #[tokio::test]
    async fn pricing_and_visibility() {
        let server = MockServer::start_async().await;
        let pricing = server.get_pricing(|when, then| {
            when.id("plan").deployment_region("us-south");
            then.ok(&PricingGet {
                origin: Some("global_catalog".to_string()),
                ..Default::default()
            });
        });
        let deployments = server.get_pricing_deployments(|when, then| {
            when.id("plan");
            then.ok(&PricingSearchResult {
                count: 1,
                resources: vec![PricingGet::default()],
                ..Default::default()
            });
        });
        let update = VisibilityUpdate {
            restrictions: Some("private".to_string()),
            ..Default::default()
        };
        let set_visibility = server.update_visibility(|when, then| {
            when.id("plan").body(&update);
            then.ok();
        });
        let client = client(&server);

        let price = client
            .pricing(GetPricingOptions::new("plan").with_deployment_region("us-south"))
            .await
            .unwrap();
        assert_eq!(price.origin.as_deref(), Some("global_catalog"));

        let result = client
            .pricing_deployments(GetPricingDeploymentsOptions::new("plan"))
            .await
            .unwrap();
        assert_eq!(result.count, 1);

        client
            .set_visibility(UpdateVisibilityOptions::new("plan", update.clone()))
            .await
            .unwrap();

        pricing.assert();
        deployments.assert();
        set_visibility.assert();
    }

    #[tokio::test]
    async fn artifacts() {
        let server = MockServer::start_async().await;
        let list = server.list_artifacts(|when, then| {
            when.object_id("object");
            then.ok(&Artifacts {
                count: 1,
                resources: vec![Artifact {
                    name: Some("logo.svg".to_string()),
                    ..Default::default()
                }],
            });
        });
        let download = server.get_artifact(|when, then| {
            when.object_id("object").artifact_id("logo.svg");
            then.ok("image/svg+xml", b"<svg/>");
        });
        let upload = server.upload_artifact(|when, then| {
            when.object_id("object").artifact_id("logo.svg").body(b"<svg/>");
            then.ok();
        });
        let delete = server.delete_artifact(|when, then| {
            when.object_id("object").artifact_id("logo.svg");
            then.ok();
        });
        let client = client(&server);

        let artifacts = client
            .artifacts(ListArtifactsOptions::new("object"))
            .await
            .unwrap();
        assert_eq!(artifacts.resources[0].name.as_deref(), Some("logo.svg"));

        let body = client
            .download_artifact(GetArtifactOptions::new("object", "logo.svg"))
            .await
            .unwrap();
        assert_eq!(body, b"<svg/>");

        client
            .upload_artifact(
                UploadArtifactOptions::new("object", "logo.svg", b"<svg/>".to_vec())
                    .with_content_type("image/svg+xml"),
            )
            .await
            .unwrap();
        client
            .delete_artifact(DeleteArtifactOptions::new("object", "logo.svg"))
            .await
            .unwrap();

        list.assert();
        download.assert();
        upload.assert();
        delete.assert();
    }

    // region: Error response handling
    //
    // Documented error statuses of an operation decode into
    // `APIError::ErrorResponse`. Other statuses are
    // `APIError::UnexpectedResponse`s, unless they carry an IBM Cloud error
    // body, which `map_api_error` parses.
    // 404 responses become the `NotFound` variant of the domain errors.

    /// 404 errors are mapped to [EntryError::NotFound],
    /// so consumers dont need to inspect raw error response
    #[tokio::test]
    async fn entry_not_found() {
        let server = MockServer::start_async().await;
        let mock = server.get_catalog_entry(|when, then| {
            when.id("missing");
            then.not_found(&ErrorResponse {
                message: Some("not found".to_string()),
                ..Default::default()
            });
        });

        let result = client(&server)
            .entry(GetCatalogEntryOptions::new("missing"))
            .await;
        assert!(
            matches!(result, Err(EntryError::NotFound)),
            "expected EntryError::NotFound, found: {result:?}"
        );
        mock.assert()
    }

    #[tokio::test]
    async fn artifact_not_found() {
        let server = MockServer::start_async().await;
        server.get_artifact(|when, then| {
            when.object_id("object");
            then.not_found(&ErrorResponse::default());
        });

        let result = client(&server)
            .download_artifact(GetArtifactOptions::new("object", "missing"))
            .await;
        assert!(
            matches!(result, Err(ArtifactError::NotFound)),
            "expected ArtifactError::NotFound, found: {result:?}"
        );
    }

    /// Other known error responses are detected
    #[tokio::test]
    async fn entry_error_response() {
        let server = MockServer::start_async().await;
        let mock = server.get_catalog_entry(|_, then| {
            then.forbidden(&ErrorResponse {
                errors: vec![error::ErrorModel {
                    code: Some("forbidden".to_string()),
                    message: Some("not allowed".to_string()),
                    more_info: None,
                }],
                ..Default::default()
            });
        });

        let result = client(&server)
            .entry(GetCatalogEntryOptions::new("entry"))
            .await;
        let Err(EntryError::GlobalCatalogError(err)) = result else {
            panic!("expected an error response, found: {result:?}");
        };
        assert!(matches!(
            err,
            GlobalCatalogError::APIError(APIError::ErrorResponse(_))
        ));
        assert_eq!(err.to_string(), "403 Forbidden: not allowed");
        mock.assert()
    }

    /// Other unknown error responses are [APIError::UnexpectedResponse]s
    #[tokio::test]
    async fn entry_unknown_response() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|_, then| {
            then.status(418)
                .header("content-type", "application/json")
                .json_body(json!({ "unknown": "ceramic" }));
        });

        let result = client(&server)
            .entry(GetCatalogEntryOptions::new("entry"))
            .await;
        assert!(
            matches!(
                result,
                Err(EntryError::GlobalCatalogError(GlobalCatalogError::APIError(
                    APIError::UnexpectedResponse(_)
                )))
            ),
            "expected APIError::UnexpectedResponse, found: {result:?}"
        );
        mock.assert()
    }

    // endregion

    #[tokio::test]
    async fn retries_can_be_toggled() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|_, then| {
            then.status(503);
        });

        let mut client = client(&server);
        client.enable_retries(RetryPolicy::new(2, Duration::from_millis(1)));
        client
            .entry(GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        mock.assert_hits(3);

        client.disable_retries();
        client
            .entry(GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        mock.assert_hits(4);
    }

    /// make_depaging_stream collects items from multiple pages
    #[tokio::test]
    async fn depage_multiple_pages() {
        let results = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let page_size = NonZeroU32::new(3).unwrap();
        let expected_results = results
            .iter()
            .flat_map(|chunk| chunk.iter())
            .map(|&item| StreamItem::from(item))
            .collect::<Vec<_>>();
        let total_results = results.iter().flat_map(|chunk| chunk.iter()).count() as i64;
        let results = &results;
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let page = (offset / page_size) as usize;
                let page_data = results.get(page).cloned().unwrap_or_default();
                Ok::<_, EntryError>((total_results, page_data))
            },
            page_size,
        );

        // First item is the total count, skip it
        let collected_results = stream.skip(1).try_collect::<Vec<_>>().await.unwrap();

        assert_eq!(collected_results, expected_results);
    }

    /// make_depaging_stream stops if a page has fewer than page_size items
    #[tokio::test]
    async fn depage_stops_on_small_page() {
        let results = (1..=9)
            .chunks(3)
            .into_iter()
            .map(|chunk| chunk.collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let total_results = results.iter().flat_map(|chunk| chunk.iter()).count() as i64;
        let page_size = NonZeroU32::new(4).unwrap();
        let results = &results;
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let page = (offset / page_size) as usize;
                // This is a bad response from the server since 9 should actually be 3
                let page_data = results.get(page).cloned().unwrap_or_default();
                Ok::<_, EntryError>((total_results, page_data))
            },
            page_size,
        );

        // First item is the total count, skip it
        let collected: Vec<StreamItem<i32>> = stream.skip(1).try_collect().await.unwrap();

        assert_eq!(collected, (1..=3).map(StreamItem::from).collect::<Vec<_>>());
    }

    /// make_depaging_stream stops when total_count is reached
    #[tokio::test]
    async fn depage_stops_at_total_count() {
        let results = (1..=9)
            .chunks(3)
            .into_iter()
            .map(|chunk| chunk.collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let results = &results;
        // note that this isn't the _real_ total_count, we just want to make sure that
        // none of the items _after_ this number are collected
        let total_count = 3;
        let page_size = NonZeroU32::new(3).unwrap();
        let stream = make_depaging_stream(
            |offset, page_size| async move {
                let page = (offset / page_size) as usize;
                let page_data = results.get(page).cloned().unwrap_or_default();
                Ok::<_, EntryError>((total_count, page_data))
            },
            page_size,
        );

        let collected: Vec<StreamItem<i32>> = stream.try_collect().await.unwrap();

        assert_eq!(collected, [
            StreamItem::TotalCount(3),
            StreamItem::Result(1),
            StreamItem::Result(2),
            StreamItem::Result(3)
        ]);
    }

    proptest! {
        #[test]
        fn collects_correct_number_of_results(results in proptest::collection::vec(any::<i32>(), 0..10), raw_limit in 0..10_u32) {
            let total = results.len();
            let results_ref = &results;
            let stream = async_stream::stream! {
                yield Ok::<StreamItem<i32>, String>(StreamItem::TotalCount(total as u64));
                for item in results_ref.iter() {
                    yield Ok(StreamItem::Result(*item));
                }
            };
            let limit = NonZeroU32::new(raw_limit); // None if raw_limit == 0
            let (found_count, collected_results) = tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(collect_results(stream, limit))
                .unwrap();
            prop_assert_eq!(found_count, Some(total as u64));

            let expected_results = if limit.is_some() {
                results.into_iter().take(raw_limit as usize).collect::<Vec<_>>()
            } else {
                results
            };
            prop_assert_eq!(expected_results, collected_results);
        }

        #[test]
        fn page_size_never_exceeds_limit(raw_limit in 0..1000_u32) {
            let limit = NonZeroU32::new(raw_limit);
            let size = page_size(limit).get();
            prop_assert!(size <= RESPONSE_PAGE_SIZE.get());
            if let Some(limit) = limit {
                prop_assert!(size <= limit.get());
            }
        }
    }
}
