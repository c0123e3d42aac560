use std::sync::OnceLock;

use tracing::error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::{EnvFilter, Registry};

use crate::commands::Verbosity;

static LOGGER_HANDLE: OnceLock<Handle<EnvFilter, Registry>> = OnceLock::new();

/// Filter directives for a verbosity level.
fn log_filter(verbosity: Verbosity) -> &'static str {
    match verbosity {
        // Show only errors
        Verbosity::Quiet => "off,gcat=error",
        // Only show warnings
        Verbosity::Verbose(0) => "off,gcat=warn,global_catalog=warn,global_catalog_api_v1=warn",
        // Show our own info logs
        Verbosity::Verbose(1) => "off,gcat=info,global_catalog=info,global_catalog_api_v1=info",
        // Also show debug from our libraries
        Verbosity::Verbose(2) => "off,gcat=debug,global_catalog=debug,global_catalog_api_v1=debug",
        // Also show trace from our libraries
        Verbosity::Verbose(3) => "off,gcat=trace,global_catalog=trace,global_catalog_api_v1=trace",
        // Also show debug from HTTP and the runtime
        Verbosity::Verbose(4) => "debug,gcat=trace,global_catalog=trace,global_catalog_api_v1=trace",
        Verbosity::Verbose(_) => "trace",
    }
}

/// Install the stderr logger, or update its filter if already installed.
///
/// `RUST_LOG` takes precedence over `verbosity`.
pub(crate) fn init_logger(verbosity: Option<Verbosity>) {
    let verbosity = verbosity.unwrap_or_default();

    let filter_handle = LOGGER_HANDLE.get_or_init(|| {
        // Start permissive, the actual level is set below.
        let filter = EnvFilter::new("trace");
        let (filter, reload_handle) = tracing_subscriber::reload::Layer::new(filter);
        let log_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(filter);
        tracing_subscriber::registry().with(log_layer).init();
        reload_handle
    });

    update_filters(filter_handle, log_filter(verbosity));
}

fn update_filters(filter_handle: &Handle<EnvFilter, Registry>, log_filter: &str) {
    let result = filter_handle.modify(|layer| {
        match EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_filter)) {
            Ok(new_filter) => *layer = new_filter,
            Err(err) => {
                error!("Updating logger filter failed: {}", err);
            },
        };
    });
    if let Err(err) = result {
        error!("Updating logger filter failed: {}", err);
    }
}
