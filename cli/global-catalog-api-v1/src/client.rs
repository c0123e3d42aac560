use std::sync::Arc;

use progenitor_client::{encode_path, Error, ResponseValue};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};

use crate::exec::{RequestHook, RetryPolicy};
use crate::types;

/// Default URL of the public Global Catalog API.
pub const DEFAULT_SERVICE_URL: &str = "https://globalcatalog.cloud.ibm.com/api/v1";

/**Client for the Global Catalog API

The catalog stores entries for services, plans, deployments and their
visibility, pricing and artifacts.

Version: 1.0.3*/
#[derive(Clone, Debug)]
pub struct Client {
    pub(crate) baseurl: String,
    pub(crate) client: reqwest::Client,
    pub(crate) hooks: Vec<Arc<dyn RequestHook>>,
    pub(crate) retry_policy: Option<RetryPolicy>,
}

impl Client {
    /// Create a new client.
    ///
    /// `baseurl` is the base URL provided to the internal
    /// `reqwest::Client`, and should include a scheme and hostname,
    /// as well as port and a path stem if applicable.
    pub fn new(baseurl: &str) -> Self {
        let dur = std::time::Duration::from_secs(15);
        let client = reqwest::ClientBuilder::new()
            .connect_timeout(dur)
            .timeout(dur)
            .build()
            .unwrap_or_default();
        Self::new_with_client(baseurl, client)
    }

    /// Construct a new client with an existing `reqwest::Client`,
    /// allowing more control over its configuration.
    pub fn new_with_client(baseurl: &str, client: reqwest::Client) -> Self {
        Self {
            baseurl: baseurl.trim_end_matches('/').to_string(),
            client,
            hooks: Vec::new(),
            retry_policy: None,
        }
    }

    /// Add a hook that runs on every request before it is sent.
    pub fn with_hook(mut self, hook: Arc<dyn RequestHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Retry failed requests according to `policy`, or not at all for `None`.
    pub fn with_retry_policy(mut self, policy: Option<RetryPolicy>) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn set_retry_policy(&mut self, policy: Option<RetryPolicy>) {
        self.retry_policy = policy;
    }

    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry_policy
    }

    /// Get the base URL to which requests are made.
    pub fn baseurl(&self) -> &String {
        &self.baseurl
    }

    /// Change the base URL to which requests are made.
    pub fn set_baseurl(&mut self, baseurl: &str) {
        self.baseurl = baseurl.trim_end_matches('/').to_string();
    }

    /// Get the internal `reqwest::Client` used to make requests.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Get the version of this API.
    pub fn api_version(&self) -> &'static str {
        "1.0.3"
    }
}

/// Fail with [Error::InvalidRequest] if a required parameter is empty.
fn require(name: &str, value: &str) -> Result<(), Error<types::ErrorResponse>> {
    if value.is_empty() {
        return Err(Error::InvalidRequest(format!("{name} must not be empty")));
    }
    Ok(())
}

trait RequestBuilderExt {
    fn headers_from(self, headers: &types::Headers) -> Self;
}

impl RequestBuilderExt for reqwest::RequestBuilder {
    /// Caller headers replace defaults of the same name, e.g. `Accept`.
    fn headers_from(self, headers: &types::Headers) -> Self {
        let mut map = HeaderMap::new();
        let mut builder = self;
        for (name, value) in headers {
            match (HeaderName::try_from(name), HeaderValue::try_from(value)) {
                (Ok(name), Ok(value)) => {
                    map.append(name, value);
                },
                // reported by `build`
                _ => builder = builder.header(name, value),
            }
        }
        builder.headers(map)
    }
}

/// Turn a documented error response into [Error::ErrorResponse].
///
/// Some proxies in front of the catalog answer with plain text,
/// which is kept as the `message` of the error.
async fn error_response(response: reqwest::Response) -> Error<types::ErrorResponse> {
    let status = response.status();
    let headers = response.headers().clone();
    match response.bytes().await {
        Ok(body) => {
            let inner = serde_json::from_slice(&body).unwrap_or_else(|_| {
                let text = String::from_utf8_lossy(&body).trim().to_string();
                types::ErrorResponse {
                    message: (!text.is_empty()).then_some(text),
                    ..Default::default()
                }
            });
            Error::ErrorResponse(ResponseValue::new(inner, status, headers))
        },
        Err(e) => e.into(),
    }
}

fn empty_response(response: &reqwest::Response) -> ResponseValue<()> {
    ResponseValue::new((), response.status(), response.headers().clone())
}

#[allow(clippy::all)]
impl Client {
    /**Returns parent catalog entries

Includes key information, such as ID, name, kind, CRN, tags, and provider.
This endpoint is ETag enabled.

Sends a `GET` request to `/`

*/
    pub async fn list_catalog_entries<'a>(
        &'a self,
        options: &'a types::ListCatalogEntriesOptions,
    ) -> Result<ResponseValue<types::EntrySearchResult>, Error<types::ErrorResponse>> {
        let url = format!("{}/", self.baseurl);
        let mut query = Vec::with_capacity(10usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.include {
            query.push(("include", v.to_string()));
        }
        if let Some(v) = &options.q {
            query.push(("q", v.to_string()));
        }
        if let Some(v) = &options.sort_by {
            query.push(("sort-by", v.to_string()));
        }
        if let Some(v) = &options.descending {
            query.push(("descending", v.to_string()));
        }
        if let Some(v) = &options.languages {
            query.push(("languages", v.to_string()));
        }
        if let Some(v) = &options.catalog {
            query.push(("catalog", v.to_string()));
        }
        if let Some(v) = &options.complete {
            query.push(("complete", v.to_string()));
        }
        if let Some(v) = &options.offset {
            query.push(("_offset", v.to_string()));
        }
        if let Some(v) = &options.limit {
            query.push(("_limit", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Create a catalog entry

The created catalog entry is restricted by default.
You must have an administrator or editor role in the scope of the provided
token. This API returns an ETag header.

Sends a `POST` request to `/`

*/
    pub async fn create_catalog_entry<'a>(
        &'a self,
        options: &'a types::CreateCatalogEntryOptions,
    ) -> Result<ResponseValue<types::CatalogEntry>, Error<types::ErrorResponse>> {
        require("name", &options.entry.name)?;
        require("kind", &options.entry.kind)?;
        require("id", options.entry.id.as_deref().unwrap_or_default())?;
        let url = format!("{}/", self.baseurl);
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .json(&options.entry)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            201u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 409u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get a specific catalog object

This endpoint returns a specific catalog entry using the object's unique
identifier, for example `/{object_id}?include=metadata.ui:metadata.pricing`.
This endpoint is ETag enabled.

Sends a `GET` request to `/{id}`

*/
    pub async fn get_catalog_entry<'a>(
        &'a self,
        options: &'a types::GetCatalogEntryOptions,
    ) -> Result<ResponseValue<types::CatalogEntry>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(5usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.include {
            query.push(("include", v.to_string()));
        }
        if let Some(v) = &options.languages {
            query.push(("languages", v.to_string()));
        }
        if let Some(v) = &options.complete {
            query.push(("complete", v.to_string()));
        }
        if let Some(v) = &options.depth {
            query.push(("depth", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Update a catalog entry

The visibility of the catalog entry is not modified by this endpoint.
Use the `move` parameter to reparent the entry.

Sends a `PUT` request to `/{id}`

*/
    pub async fn update_catalog_entry<'a>(
        &'a self,
        options: &'a types::UpdateCatalogEntryOptions,
    ) -> Result<ResponseValue<types::CatalogEntry>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        require("name", &options.entry.name)?;
        require("kind", &options.entry.kind)?;
        let url = format!("{}/{}", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(2usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.move_ {
            query.push(("move", v.to_string()));
        }
        let request = self
            .client
            .put(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .json(&options.entry)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 | 409u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Delete a catalog entry

Deletes the entry and all of its children. Entries that are already deleted
are only removed with `force`.

Sends a `DELETE` request to `/{id}`

*/
    pub async fn delete_catalog_entry<'a>(
        &'a self,
        options: &'a types::DeleteCatalogEntryOptions,
    ) -> Result<ResponseValue<()>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(2usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.force {
            query.push(("force", v.to_string()));
        }
        let request = self
            .client
            .delete(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => Ok(empty_response(&response)),
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get child catalog entries of a specific kind

Fetch child catalog entries for a catalog entry with a specific id.
Use `*` as `kind` to return children of all kinds.

Sends a `GET` request to `/{id}/{kind}`

*/
    pub async fn get_child_objects<'a>(
        &'a self,
        options: &'a types::GetChildObjectsOptions,
    ) -> Result<ResponseValue<types::EntrySearchResult>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        require("kind", &options.kind)?;
        let url = format!(
            "{}/{}/{}",
            self.baseurl,
            encode_path(&options.id),
            encode_path(&options.kind),
        );
        let mut query = Vec::with_capacity(9usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.include {
            query.push(("include", v.to_string()));
        }
        if let Some(v) = &options.q {
            query.push(("q", v.to_string()));
        }
        if let Some(v) = &options.sort_by {
            query.push(("sort-by", v.to_string()));
        }
        if let Some(v) = &options.descending {
            query.push(("descending", v.to_string()));
        }
        if let Some(v) = &options.languages {
            query.push(("languages", v.to_string()));
        }
        if let Some(v) = &options.complete {
            query.push(("complete", v.to_string()));
        }
        if let Some(v) = &options.offset {
            query.push(("_offset", v.to_string()));
        }
        if let Some(v) = &options.limit {
            query.push(("_limit", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Restore a soft-deleted catalog entry

Sends a `PUT` request to `/{id}/restore`

*/
    pub async fn restore_catalog_entry<'a>(
        &'a self,
        options: &'a types::RestoreCatalogEntryOptions,
    ) -> Result<ResponseValue<()>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}/restore", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .put(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 | 204u16 => Ok(empty_response(&response)),
            401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get the visibility constraints for an object

This endpoint returns the visibility rules for this object.
Overall visibility is determined by the parent objects and any further
restrictions on this object.

Sends a `GET` request to `/{id}/visibility`

*/
    pub async fn get_visibility<'a>(
        &'a self,
        options: &'a types::GetVisibilityOptions,
    ) -> Result<ResponseValue<types::Visibility>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}/visibility", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Update visibility

Update an Object's Visibility. You must have an administrator role in the
scope of the provided token.

Sends a `PUT` request to `/{id}/visibility`

*/
    pub async fn update_visibility<'a>(
        &'a self,
        options: &'a types::UpdateVisibilityOptions,
    ) -> Result<ResponseValue<()>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}/visibility", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .put(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .json(&options.visibility)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => Ok(empty_response(&response)),
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get the pricing for an object

This endpoint returns the pricing for an object. Static pricing is defined
in the catalog. Dynamic pricing is stored in IBM Cloud Pricing Catalog.

Sends a `GET` request to `/{id}/pricing`

*/
    pub async fn get_pricing<'a>(
        &'a self,
        options: &'a types::GetPricingOptions,
    ) -> Result<ResponseValue<types::PricingGet>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}/pricing", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(4usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.deployment_id {
            query.push(("deployment_id", v.to_string()));
        }
        if let Some(v) = &options.deployment_region {
            query.push(("deployment_region", v.to_string()));
        }
        if let Some(v) = &options.deployment_location {
            query.push(("deployment_location", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get the pricing deployments for a plan

This endpoint returns the deployment pricing for a plan.

Sends a `GET` request to `/{id}/pricing/deployment`

*/
    pub async fn get_pricing_deployments<'a>(
        &'a self,
        options: &'a types::GetPricingDeploymentsOptions,
    ) -> Result<ResponseValue<types::PricingSearchResult>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!(
            "{}/{}/pricing/deployment",
            self.baseurl,
            encode_path(&options.id),
        );
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get the audit logs for an object

This endpoint returns the audit logs for an object. Only administrators
and editors can get logs.

Sends a `GET` request to `/{id}/logs`

*/
    pub async fn get_audit_logs<'a>(
        &'a self,
        options: &'a types::GetAuditLogsOptions,
    ) -> Result<ResponseValue<types::AuditSearchResult>, Error<types::ErrorResponse>> {
        require("id", &options.id)?;
        let url = format!("{}/{}/logs", self.baseurl, encode_path(&options.id));
        let mut query = Vec::with_capacity(5usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        if let Some(v) = &options.ascending {
            query.push(("ascending", v.to_string()));
        }
        if let Some(v) = &options.startat {
            query.push(("startat", v.to_string()));
        }
        if let Some(v) = &options.offset {
            query.push(("_offset", v.to_string()));
        }
        if let Some(v) = &options.limit {
            query.push(("_limit", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            400u16 | 401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get artifacts

This endpoint returns a list of artifacts for an object.

Sends a `GET` request to `/{object_id}/artifacts`

*/
    pub async fn list_artifacts<'a>(
        &'a self,
        options: &'a types::ListArtifactsOptions,
    ) -> Result<ResponseValue<types::Artifacts>, Error<types::ErrorResponse>> {
        require("object_id", &options.object_id)?;
        let url = format!(
            "{}/{}/artifacts",
            self.baseurl,
            encode_path(&options.object_id),
        );
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => ResponseValue::from_response(response).await,
            401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Get artifact

This endpoint returns the binary of an artifact.

Sends a `GET` request to `/{object_id}/artifacts/{artifact_id}`

*/
    pub async fn get_artifact<'a>(
        &'a self,
        options: &'a types::GetArtifactOptions,
    ) -> Result<ResponseValue<Vec<u8>>, Error<types::ErrorResponse>> {
        require("object_id", &options.object_id)?;
        require("artifact_id", &options.artifact_id)?;
        let url = format!(
            "{}/{}/artifacts/{}",
            self.baseurl,
            encode_path(&options.object_id),
            encode_path(&options.artifact_id),
        );
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .get(url)
            .header(ACCEPT, options.accept.as_deref().unwrap_or("*/*"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => {
                let status = response.status();
                let headers = response.headers().clone();
                let body = response.bytes().await?;
                Ok(ResponseValue::new(body.to_vec(), status, headers))
            },
            401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Upload artifact

This endpoint uploads the binary for an artifact. Only administrators and
editors can upload artifacts.

Sends a `PUT` request to `/{object_id}/artifacts/{artifact_id}`

*/
    pub async fn upload_artifact<'a>(
        &'a self,
        options: &'a types::UploadArtifactOptions,
    ) -> Result<ResponseValue<()>, Error<types::ErrorResponse>> {
        require("object_id", &options.object_id)?;
        require("artifact_id", &options.artifact_id)?;
        let url = format!(
            "{}/{}/artifacts/{}",
            self.baseurl,
            encode_path(&options.object_id),
            encode_path(&options.artifact_id),
        );
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let content_type = options
            .content_type
            .as_deref()
            .unwrap_or("application/octet-stream");
        let request = self
            .client
            .put(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, content_type)
            .headers_from(&options.headers)
            .body(options.artifact.clone())
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => Ok(empty_response(&response)),
            401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }

    /**Delete artifact

This endpoint deletes an artifact. Only administrators and editors can
delete artifacts.

Sends a `DELETE` request to `/{object_id}/artifacts/{artifact_id}`

*/
    pub async fn delete_artifact<'a>(
        &'a self,
        options: &'a types::DeleteArtifactOptions,
    ) -> Result<ResponseValue<()>, Error<types::ErrorResponse>> {
        require("object_id", &options.object_id)?;
        require("artifact_id", &options.artifact_id)?;
        let url = format!(
            "{}/{}/artifacts/{}",
            self.baseurl,
            encode_path(&options.object_id),
            encode_path(&options.artifact_id),
        );
        let mut query = Vec::with_capacity(1usize);
        if let Some(v) = &options.account {
            query.push(("account", v.to_string()));
        }
        let request = self
            .client
            .delete(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .headers_from(&options.headers)
            .query(&query)
            .build()?;
        let response = self.exec(request).await?;
        match response.status().as_u16() {
            200u16 => Ok(empty_response(&response)),
            401u16 | 403u16 | 404u16 => Err(error_response(response).await),
            _ => Err(Error::UnexpectedResponse(response)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::future::BoxFuture;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::types::*;

    fn client(server: &MockServer) -> Client {
        Client::new(&server.base_url())
    }

    fn prototype() -> CatalogEntryPrototype {
        CatalogEntryPrototype {
            name: "my-service".to_string(),
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
            id: Some("my-service-id".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_catalog_entries_sends_query_and_headers() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/")
                    .header("accept", "application/json")
                    .header("x-custom", "value")
                    .query_param("account", "acc")
                    .query_param("include", "*")
                    .query_param("q", "kind:service")
                    .query_param("sort-by", "name")
                    .query_param("descending", "true")
                    .query_param("languages", "en")
                    .query_param("catalog", "true")
                    .query_param("complete", "false")
                    .query_param("_offset", "10")
                    .query_param("_limit", "20");
                then.status(200).json_body(json!({
                    "offset": 10,
                    "limit": 20,
                    "count": 11,
                    "resource_count": 1,
                    "resources": [{ "id": "entry-1", "name": "entry" }]
                }));
            })
            .await;

        let options = ListCatalogEntriesOptions::new()
            .with_account("acc")
            .with_include("*")
            .with_q("kind:service")
            .with_sort_by("name")
            .with_descending(true)
            .with_languages("en")
            .with_catalog(true)
            .with_complete(false)
            .with_offset(10)
            .with_limit(20)
            .with_header("x-custom", "value");

        let response = client(&server)
            .list_catalog_entries(&options)
            .await
            .unwrap();
        mock.assert_async().await;

        assert_eq!(response.status(), 200);
        let result = response.into_inner();
        assert_eq!(result.count, 11);
        assert_eq!(result.resources[0].id.as_deref(), Some("entry-1"));
    }

    #[tokio::test]
    async fn create_catalog_entry_posts_json_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/")
                    .header("content-type", "application/json")
                    .json_body(serde_json::to_value(prototype()).unwrap());
                then.status(201)
                    .json_body(json!({ "id": "my-service-id", "name": "my-service" }));
            })
            .await;

        let entry = client(&server)
            .create_catalog_entry(&CreateCatalogEntryOptions::new(prototype()))
            .await
            .unwrap()
            .into_inner();
        mock.assert_async().await;
        assert_eq!(entry.id.as_deref(), Some("my-service-id"));
    }

    #[tokio::test]
    async fn required_fields_are_validated_before_sending() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|_when, then| {
                then.status(200);
            })
            .await;
        let client = client(&server);

        let mut entry = prototype();
        entry.id = None;
        let err = client
            .create_catalog_entry(&CreateCatalogEntryOptions::new(entry))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(ref msg) if msg.contains("id")));

        let err = client
            .get_catalog_entry(&GetCatalogEntryOptions::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(_)));

        let err = client
            .delete_artifact(&DeleteArtifactOptions::new("object", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(ref msg) if msg.contains("artifact_id")));

        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn path_parameters_are_encoded() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/a%2Fb/plan")
                    .query_param("_limit", "5");
                then.status(200).json_body(json!({ "resources": [] }));
            })
            .await;

        let result = client(&server)
            .get_child_objects(&GetChildObjectsOptions::new("a/b", "plan").with_limit(5))
            .await
            .unwrap()
            .into_inner();
        mock.assert_async().await;
        assert_eq!(result.resources, vec![]);
    }

    #[tokio::test]
    async fn update_catalog_entry_sends_move() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/my-service-id")
                    .query_param("move", "new-parent");
                then.status(200).json_body(json!({ "id": "my-service-id" }));
            })
            .await;

        let options =
            UpdateCatalogEntryOptions::new("my-service-id", prototype()).with_move("new-parent");
        client(&server)
            .update_catalog_entry(&options)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn empty_responses() {
        let server = MockServer::start_async().await;
        let delete = server
            .mock_async(|when, then| {
                when.method(DELETE)
                    .path("/entry")
                    .query_param("force", "true");
                then.status(200);
            })
            .await;
        let restore = server
            .mock_async(|when, then| {
                when.method(PUT).path("/entry/restore");
                then.status(204);
            })
            .await;
        let visibility = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/entry/visibility")
                    .json_body(json!({
                        "include": { "accounts": { "_accountid": "abc" } }
                    }));
                then.status(200);
            })
            .await;
        let client = client(&server);

        let response = client
            .delete_catalog_entry(&DeleteCatalogEntryOptions::new("entry").with_force(true))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let response = client
            .restore_catalog_entry(&RestoreCatalogEntryOptions::new("entry"))
            .await
            .unwrap();
        assert_eq!(response.status(), 204);

        let update = VisibilityUpdate {
            include: Some(VisibilityDetail {
                accounts: VisibilityDetailAccounts {
                    accountid: Some("abc".to_string()),
                },
            }),
            ..Default::default()
        };
        client
            .update_visibility(&UpdateVisibilityOptions::new("entry", update))
            .await
            .unwrap();

        delete.assert_async().await;
        restore.assert_async().await;
        visibility.assert_async().await;
    }

    #[tokio::test]
    async fn pricing_and_audit_log_queries() {
        let server = MockServer::start_async().await;
        let pricing = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/plan/pricing")
                    .query_param("deployment_id", "dep")
                    .query_param("deployment_region", "us-south")
                    .query_param("deployment_location", "dal10");
                then.status(200).json_body(json!({
                    "deployment_id": "dep",
                    "type": "paid",
                    "metrics": [{ "metric_id": "m1", "amounts": [{ "country": "USA", "prices": [{ "quantity_tier": 1, "Price": 0.5 }] }] }]
                }));
            })
            .await;
        let deployments = server
            .mock_async(|when, then| {
                when.method(GET).path("/plan/pricing/deployment");
                then.status(200)
                    .json_body(json!({ "count": 1, "resources": [{ "deployment_id": "dep" }] }));
            })
            .await;
        let logs = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/plan/logs")
                    .query_param("ascending", "false")
                    .query_param("startat", "2020-01-01T00:00:00Z");
                then.status(200).json_body(json!({
                    "count": 1,
                    "resources": [{ "id": "log-1", "type": "update", "message": "changed" }]
                }));
            })
            .await;
        let client = client(&server);

        let options = GetPricingOptions::new("plan")
            .with_deployment_id("dep")
            .with_deployment_region("us-south")
            .with_deployment_location("dal10");
        let price = client.get_pricing(&options).await.unwrap().into_inner();
        assert_eq!(price.type_.as_deref(), Some("paid"));
        assert_eq!(price.metrics[0].amounts[0].prices[0].price, Some(0.5));

        let result = client
            .get_pricing_deployments(&GetPricingDeploymentsOptions::new("plan"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(result.resources[0].deployment_id.as_deref(), Some("dep"));

        let options = GetAuditLogsOptions::new("plan")
            .with_ascending(false)
            .with_startat("2020-01-01T00:00:00Z");
        let result = client.get_audit_logs(&options).await.unwrap().into_inner();
        assert_eq!(result.resources[0].message.as_deref(), Some("changed"));

        pricing.assert_async().await;
        deployments.assert_async().await;
        logs.assert_async().await;
    }

    #[tokio::test]
    async fn artifacts_round_trip_as_bytes() {
        let server = MockServer::start_async().await;
        let upload = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/object/artifacts/readme.md")
                    .header("content-type", "text/markdown")
                    .body("# hello");
                then.status(200);
            })
            .await;
        let download = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/object/artifacts/readme.md")
                    .header("accept", "text/markdown");
                then.status(200)
                    .header("content-type", "text/markdown")
                    .body("# hello");
            })
            .await;
        let list = server
            .mock_async(|when, then| {
                when.method(GET).path("/object/artifacts");
                then.status(200).json_body(json!({
                    "count": 1,
                    "resources": [{ "name": "readme.md", "size": 7 }]
                }));
            })
            .await;
        let client = client(&server);

        let options = UploadArtifactOptions::new("object", "readme.md", "# hello")
            .with_content_type("text/markdown");
        client.upload_artifact(&options).await.unwrap();

        let options = GetArtifactOptions::new("object", "readme.md").with_accept("text/markdown");
        let body = client.get_artifact(&options).await.unwrap().into_inner();
        assert_eq!(body, b"# hello".to_vec());

        let artifacts = client
            .list_artifacts(&ListArtifactsOptions::new("object"))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(artifacts.resources[0].size, Some(7));

        upload.assert_async().await;
        download.assert_async().await;
        list.assert_async().await;
    }

    #[tokio::test]
    async fn documented_errors_decode_error_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404).json_body(json!({
                    "errors": [{ "code": "not_found", "message": "no such entry" }],
                    "trace": "trace-id"
                }));
            })
            .await;

        let err = client(&server)
            .get_catalog_entry(&GetCatalogEntryOptions::new("missing"))
            .await
            .unwrap_err();
        let Error::ErrorResponse(response) = err else {
            panic!("expected an error response, got {err:?}");
        };
        assert_eq!(response.status(), 404);
        assert_eq!(response.detail(), Some("no such entry"));
    }

    #[tokio::test]
    async fn plain_text_errors_are_kept_as_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entry/visibility");
                then.status(403).body("Forbidden");
            })
            .await;

        let err = client(&server)
            .get_visibility(&GetVisibilityOptions::new("entry"))
            .await
            .unwrap_err();
        let Error::ErrorResponse(response) = err else {
            panic!("expected an error response, got {err:?}");
        };
        assert_eq!(response.detail(), Some("Forbidden"));
    }

    #[tokio::test]
    async fn undocumented_status_is_unexpected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(418);
            })
            .await;

        let err = client(&server)
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(ref r) if r.status() == 418));
    }

    #[tokio::test]
    async fn malformed_json_is_invalid_payload() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(200)
                    .header("content-type", "application/json")
                    .body("{ not json");
            })
            .await;

        let err = client(&server)
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidResponsePayload(..)));
    }

    #[tokio::test]
    async fn slow_responses_time_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(200)
                    .json_body(json!({ "id": "entry" }))
                    .delay(Duration::from_millis(500));
            })
            .await;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let client = Client::new_with_client(&server.base_url(), http);
        let err = client
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::CommunicationError(ref e) if e.is_timeout()));

        // A call can also be abandoned by the caller.
        let client = Client::new(&server.base_url());
        let options = GetCatalogEntryOptions::new("entry");
        let result = tokio::time::timeout(
            Duration::from_millis(50),
            client.get_catalog_entry(&options),
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn retries_server_errors_until_exhausted() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(503).header("retry-after", "0");
            })
            .await;

        let client = client(&server)
            .with_retry_policy(Some(RetryPolicy::new(2, Duration::from_millis(10))));
        let err = client
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(ref r) if r.status() == 503));
        mock.assert_hits_async(3).await;
    }

    #[tokio::test]
    async fn does_not_retry_client_errors_or_not_implemented() {
        let server = MockServer::start_async().await;
        let not_found = server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404).json_body(json!({ "message": "gone" }));
            })
            .await;
        let not_implemented = server
            .mock_async(|when, then| {
                when.method(GET).path("/entry/visibility");
                then.status(501);
            })
            .await;

        let client = client(&server)
            .with_retry_policy(Some(RetryPolicy::new(3, Duration::from_millis(10))));
        client
            .get_catalog_entry(&GetCatalogEntryOptions::new("missing"))
            .await
            .unwrap_err();
        client
            .get_visibility(&GetVisibilityOptions::new("entry"))
            .await
            .unwrap_err();

        not_found.assert_hits_async(1).await;
        not_implemented.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn without_policy_requests_are_sent_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(429);
            })
            .await;

        client(&server)
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn caller_headers_replace_defaults() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/entry")
                    .header("accept", "application/vnd.custom+json")
                    .matches(|req| {
                        Some(req.headers_vec())
                            .as_ref()
                            .map(|headers| {
                                headers
                                    .iter()
                                    .filter(|(name, _)| name.eq_ignore_ascii_case("accept"))
                                    .count()
                            })
                            == Some(1)
                    });
                then.status(200).json_body(json!({ "id": "entry" }));
            })
            .await;

        let options = GetCatalogEntryOptions::new("entry")
            .with_header("Accept", "application/vnd.custom+json");
        client(&server).get_catalog_entry(&options).await.unwrap();
        mock.assert_async().await;

        let options = GetCatalogEntryOptions::new("entry").with_header("bad header", "value");
        let err = client(&server).get_catalog_entry(&options).await.unwrap_err();
        assert!(matches!(err, Error::CommunicationError(ref e) if e.is_builder()));
    }

    #[tokio::test]
    async fn retries_rate_limited_requests() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/entry");
                then.status(429).header("retry-after", "0");
            })
            .await;

        let client = client(&server)
            .with_retry_policy(Some(RetryPolicy::new(2, Duration::from_millis(10))));
        let err = client
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedResponse(ref r) if r.status() == 429));
        mock.assert_hits_async(3).await;
    }

    #[tokio::test]
    async fn retries_connection_failures() {
        // a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let client = Client::new(&format!("http://127.0.0.1:{port}"))
            .with_retry_policy(Some(RetryPolicy::new(2, Duration::from_millis(100))));
        let start = std::time::Instant::now();
        let err = client
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CommunicationError(ref e) if e.is_connect()));
        // two waits of `max_interval` before giving up
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test]
    async fn streaming_bodies_are_sent_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT).path("/entry/artifacts/data");
                then.status(503);
            })
            .await;

        let client = client(&server)
            .with_retry_policy(Some(RetryPolicy::new(3, Duration::from_millis(10))));
        let body = reqwest::Body::wrap_stream(futures::stream::once(async {
            Ok::<_, std::io::Error>("streamed")
        }));
        let request = client
            .client
            .put(server.url("/entry/artifacts/data"))
            .body(body)
            .build()
            .unwrap();

        let response = client.exec(request).await.unwrap();
        assert_eq!(response.status(), 503);
        mock.assert_hits_async(1).await;
    }

    #[derive(Debug)]
    struct StaticToken(&'static str);

    impl RequestHook for StaticToken {
        fn on_request<'a>(
            &'a self,
            request: &'a mut reqwest::Request,
        ) -> BoxFuture<'a, Result<(), String>> {
            Box::pin(async move {
                let value = HeaderValue::from_str(&format!("Bearer {}", self.0))
                    .map_err(|e| e.to_string())?;
                request
                    .headers_mut()
                    .insert(reqwest::header::AUTHORIZATION, value);
                Ok(())
            })
        }
    }

    #[derive(Debug)]
    struct FailingHook;

    impl RequestHook for FailingHook {
        fn on_request<'a>(
            &'a self,
            _request: &'a mut reqwest::Request,
        ) -> BoxFuture<'a, Result<(), String>> {
            Box::pin(async { Err("no credentials".to_string()) })
        }
    }

    #[tokio::test]
    async fn hooks_modify_requests() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/entry")
                    .header("authorization", "Bearer secret");
                then.status(200).json_body(json!({ "id": "entry" }));
            })
            .await;

        client(&server)
            .with_hook(Arc::new(StaticToken("secret")))
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap();
        mock.assert_async().await;

        let err = client(&server)
            .with_hook(Arc::new(FailingHook))
            .get_catalog_entry(&GetCatalogEntryOptions::new("entry"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidRequest(ref msg) if msg == "no credentials"));
        mock.assert_hits_async(1).await;
    }
}
