//! Global Catalog interaction types.
//!
//! These wrap the API types where listings are collected across pages or
//! where fetched entries are turned back into request bodies.

use std::num::NonZeroU32;

use global_catalog_api_v1::types as api_types;
use serde::{Deserialize, Serialize};

use crate::error::GlobalCatalogError;

/// Maximum number of results to collect, all of them for `None`.
pub type ListLimit = Option<NonZeroU32>;
pub type ResultCount = Option<u64>;

/// Generic paginated result container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPage<T> {
    pub results: Vec<T>,
    /// Total number of results known to the server,
    /// which may be more than collected into `results`.
    pub count: ResultCount,
}

pub use api_types::CatalogEntry;
pub type CatalogEntries = ResultsPage<CatalogEntry>;

pub use api_types::Message as AuditLogEntry;
pub type AuditLog = ResultsPage<AuditLogEntry>;

/// Turn a fetched entry into the body to update it with.
///
/// The `url` of the fetched entry is kept, the server uses it to detect
/// conflicting updates.
pub fn entry_to_prototype(
    entry: CatalogEntry,
) -> Result<api_types::CatalogEntryPrototype, GlobalCatalogError> {
    let missing = |field: &str| {
        GlobalCatalogError::Other(format!("catalog entry is missing the '{field}' field"))
    };

    let metadata = entry.metadata.map(|metadata| api_types::ObjectMetadataSet {
        rc_compatible: metadata.rc_compatible,
        service: metadata.service,
        plan: metadata.plan,
        alias: metadata.alias,
        template: metadata.template,
        ui: metadata.ui,
        compliance: metadata.compliance,
        sla: metadata.sla,
        callbacks: metadata.callbacks,
        original_name: metadata.original_name,
        version: metadata.version,
        other: metadata.other,
        pricing: metadata.pricing.map(|pricing| api_types::PricingSet {
            type_: pricing.type_,
            origin: pricing.origin,
            starting_price: pricing.starting_price,
        }),
        deployment: metadata.deployment,
    });

    Ok(api_types::CatalogEntryPrototype {
        name: entry.name.ok_or_else(|| missing("name"))?,
        kind: entry.kind.ok_or_else(|| missing("kind"))?,
        overview_ui: entry.overview_ui,
        images: entry.images.ok_or_else(|| missing("images"))?,
        parent_id: entry.parent_id,
        disabled: entry.disabled.unwrap_or(false),
        tags: entry.tags,
        group: entry.group,
        provider: entry.provider.ok_or_else(|| missing("provider"))?,
        active: entry.active,
        url: entry.url,
        metadata,
        id: entry.id,
    })
}
