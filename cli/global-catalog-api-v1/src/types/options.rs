//! Per-operation parameters.
//!
//! Required parameters are taken by `new`, everything else is optional and
//! can be set with the `with_*` methods or directly through the public
//! fields. Every operation accepts extra request headers in `headers`.

use std::collections::BTreeMap;

use super::{CatalogEntryPrototype, VisibilityUpdate};

/// Extra headers sent with a single request.
pub type Headers = BTreeMap<String, String>;

macro_rules! with_header {
    () => {
        /// Send an additional header with this request.
        pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
            self.headers.insert(name.into(), value.into());
            self
        }

        /// Scope the request to the given account.
        pub fn with_account(mut self, account: impl Into<String>) -> Self {
            self.account = Some(account.into());
            self
        }
    };
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListCatalogEntriesOptions {
    pub account: Option<String>,
    /// Colon separated list of properties to include, e.g.
    /// `metadata.ui:metadata.pricing`, or `*` for all of them.
    pub include: Option<String>,
    /// A query filter, e.g. `q=kind:iaas service_name rc:true`.
    pub q: Option<String>,
    /// Field on which to sort the results.
    pub sort_by: Option<String>,
    pub descending: Option<String>,
    /// Comma separated list of languages to return, or `*` for all.
    pub languages: Option<String>,
    /// Return only catalog entries that are owned by the account.
    pub catalog: Option<bool>,
    /// Return the entries with all of their translations and metadata.
    pub complete: Option<bool>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: Headers,
}

impl ListCatalogEntriesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    with_header!();

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending.to_string());
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    pub fn with_catalog(mut self, catalog: bool) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateCatalogEntryOptions {
    pub entry: CatalogEntryPrototype,
    pub account: Option<String>,
    pub headers: Headers,
}

impl CreateCatalogEntryOptions {
    pub fn new(entry: CatalogEntryPrototype) -> Self {
        Self {
            entry,
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetCatalogEntryOptions {
    pub id: String,
    pub account: Option<String>,
    pub include: Option<String>,
    pub languages: Option<String>,
    pub complete: Option<bool>,
    /// Return the children down to the given depth.
    pub depth: Option<i64>,
    pub headers: Headers,
}

impl GetCatalogEntryOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn with_depth(mut self, depth: i64) -> Self {
        self.depth = Some(depth);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateCatalogEntryOptions {
    pub id: String,
    pub entry: CatalogEntryPrototype,
    pub account: Option<String>,
    /// Reparent the entry. Sent as the `move` query parameter, with the new
    /// parent set as `parent_id` in the body.
    pub move_: Option<String>,
    pub headers: Headers,
}

impl UpdateCatalogEntryOptions {
    pub fn new(id: impl Into<String>, entry: CatalogEntryPrototype) -> Self {
        Self {
            id: id.into(),
            entry,
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_move(mut self, move_: impl Into<String>) -> Self {
        self.move_ = Some(move_.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteCatalogEntryOptions {
    pub id: String,
    pub account: Option<String>,
    /// Delete the entry even if it is already in a deleted state.
    pub force: Option<bool>,
    pub headers: Headers,
}

impl DeleteCatalogEntryOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetChildObjectsOptions {
    pub id: String,
    /// The kind of child to return, or `*` for all kinds.
    pub kind: String,
    pub account: Option<String>,
    pub include: Option<String>,
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub descending: Option<String>,
    pub languages: Option<String>,
    pub complete: Option<bool>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: Headers,
}

impl GetChildObjectsOptions {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn with_q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending.to_string());
        self
    }

    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    pub fn with_complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RestoreCatalogEntryOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: Headers,
}

impl RestoreCatalogEntryOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetVisibilityOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: Headers,
}

impl GetVisibilityOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateVisibilityOptions {
    pub id: String,
    pub visibility: VisibilityUpdate,
    pub account: Option<String>,
    pub headers: Headers,
}

impl UpdateVisibilityOptions {
    pub fn new(id: impl Into<String>, visibility: VisibilityUpdate) -> Self {
        Self {
            id: id.into(),
            visibility,
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetPricingOptions {
    pub id: String,
    pub account: Option<String>,
    pub deployment_id: Option<String>,
    pub deployment_region: Option<String>,
    pub deployment_location: Option<String>,
    pub headers: Headers,
}

impl GetPricingOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_deployment_id(mut self, deployment_id: impl Into<String>) -> Self {
        self.deployment_id = Some(deployment_id.into());
        self
    }

    pub fn with_deployment_region(mut self, deployment_region: impl Into<String>) -> Self {
        self.deployment_region = Some(deployment_region.into());
        self
    }

    pub fn with_deployment_location(mut self, deployment_location: impl Into<String>) -> Self {
        self.deployment_location = Some(deployment_location.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetPricingDeploymentsOptions {
    pub id: String,
    pub account: Option<String>,
    pub headers: Headers,
}

impl GetPricingDeploymentsOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetAuditLogsOptions {
    pub id: String,
    pub account: Option<String>,
    pub ascending: Option<String>,
    /// Starting time for the logs, as an RFC 3339 timestamp.
    pub startat: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: Headers,
}

impl GetAuditLogsOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = Some(ascending.to_string());
        self
    }

    pub fn with_startat(mut self, startat: impl Into<String>) -> Self {
        self.startat = Some(startat.into());
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListArtifactsOptions {
    pub object_id: String,
    pub account: Option<String>,
    pub headers: Headers,
}

impl ListArtifactsOptions {
    pub fn new(object_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            ..Default::default()
        }
    }

    with_header!();
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    pub account: Option<String>,
    /// Media type the artifact should be returned as, `*/*` if unset.
    pub accept: Option<String>,
    pub headers: Headers,
}

impl GetArtifactOptions {
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    pub artifact: Vec<u8>,
    /// Media type of `artifact`, `application/octet-stream` if unset.
    pub content_type: Option<String>,
    pub account: Option<String>,
    pub headers: Headers,
}

impl UploadArtifactOptions {
    pub fn new(
        object_id: impl Into<String>,
        artifact_id: impl Into<String>,
        artifact: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            artifact: artifact.into(),
            ..Default::default()
        }
    }

    with_header!();

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeleteArtifactOptions {
    pub object_id: String,
    pub artifact_id: String,
    pub account: Option<String>,
    pub headers: Headers,
}

impl DeleteArtifactOptions {
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            artifact_id: artifact_id.into(),
            ..Default::default()
        }
    }

    with_header!();
}
