//! Client for the Global Catalog API.
//!
//! This crate provides:
//! - construction of an authenticated, retrying HTTP client
//! - configuration from code or from `<SERVICE>_*` properties in the
//!   environment and an `ibm-credentials.env` file
//! - the [GlobalCatalog] trait with higher level operations such as
//!   depaging listings and domain specific errors
//! - record/replay of API interactions for integration tests (feature `mock`)
//! - re-exports of the `global-catalog-api-v1` types for consumers
//!
//! ## Usage
//!
//! ```ignore
//! use global_catalog::{GlobalCatalog, GlobalCatalogClient, GlobalCatalogConfig};
//! use global_catalog::types::ListCatalogEntriesOptions;
//!
//! let config = GlobalCatalogConfig::from_external("global_catalog")?;
//! let client = GlobalCatalogClient::new(config)?;
//! let entries = client
//!     .list_entries(ListCatalogEntriesOptions::new().with_q("kind:service"), None)
//!     .await?;
//! ```

mod auth;
mod client;
mod config;
mod error;
mod external;
mod models;

#[cfg(feature = "mock")]
pub(crate) mod mock;

// Re-export global-catalog-api-v1 types for consumers,
// so they only need to depend on this crate.
pub use auth::{Authenticator, IamAuthenticator, IamAuthenticatorBuilder, DEFAULT_IAM_URL};
pub use client::{GlobalCatalog, GlobalCatalogClient};
pub use config::{GlobalCatalogConfig, GlobalCatalogMockMode, DEFAULT_SERVICE_NAME};
pub use error::{ArtifactError, EntryError, GlobalCatalogError, MapApiErrorExt};
pub use global_catalog_api_v1::{
    types,
    Client as ApiClient,
    Error as ApiError,
    RetryPolicy,
    DEFAULT_SERVICE_URL,
};
pub use models::*;
