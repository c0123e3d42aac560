//! This crate contains the typed bindings for the Global Catalog API (v1).
//!
//! The layout follows the shape of a `progenitor` generated client:
//! [`types`] holds the JSON schema shapes of the API resources and the
//! per-operation option types, [`Client`] has one async method per
//! operation and responses come back as [`ResponseValue`]s.
//! The shared error and response types are re-exported from
//! `progenitor_client` so consumers can treat this crate like any other
//! generated API crate.

#[allow(unused_imports)]
pub use progenitor_client::{Error, ResponseValue};

mod client;
mod exec;
pub mod types;

pub use client::{Client, DEFAULT_SERVICE_URL};
pub use exec::{RequestHook, RetryPolicy};

/// A mock server for the api, built on `httpmock`.
#[cfg(feature = "mock-client")]
pub mod mock;

/// Items consumers will typically use such as the Client.
pub mod prelude {
    #[allow(unused_imports)]
    pub use super::Client;
}
