use std::env;
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config as HierarchicalConfig, Environment};
use global_catalog::RetryPolicy;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xdg::BaseDirectories;

/// Name of the gcat config directory
const GCAT_DIR_NAME: &str = "gcat";
const GCAT_CONFIG_DIR_VAR: &str = "GCAT_CONFIG_DIR";
pub const GCAT_CONFIG_FILE: &str = "gcat.toml";
const GCAT_ENV_PREFIX: &str = "GCAT";

/// User configuration of the gcat CLI.
///
/// Credentials are not part of this file,
/// they are read from the environment or an `ibm-credentials.env` file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// The Global Catalog endpoint, overrides `GLOBAL_CATALOG_URL`
    pub service_url: Option<String>,

    /// Account to scope requests to, unless `--account` is passed
    pub account: Option<String>,

    /// How many results listings show by default (default: all)
    pub page_limit: Option<NonZeroU32>,

    /// Retry failed requests this many times
    pub retries: Option<u32>,

    /// Upper bound for the wait between retries
    pub max_retry_interval_secs: Option<u64>,
}

impl Config {
    /// Read the configuration from, in increasing priority,
    /// `$XDG_CONFIG_DIRS/gcat/gcat.toml`, `$XDG_CONFIG_HOME/gcat/gcat.toml`
    /// (or `$GCAT_CONFIG_DIR/gcat.toml`) and `GCAT_*` variables.
    pub fn parse() -> Result<Config> {
        let mut builder = HierarchicalConfig::builder();

        for file in config_files() {
            debug!(file = %file.display(), "reading config file");
            builder = builder.add_source(
                config::File::from(file)
                    .format(config::FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(Environment::with_prefix(GCAT_ENV_PREFIX).try_parsing(true))
            .build()
            .context("Could not read configuration")?
            .try_deserialize::<Config>()
            .context("Invalid configuration")?;

        debug!(?config, "parsed config");
        Ok(config)
    }

    /// The retry policy requested by the user, if any.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        let max_retries = self.retries?;
        let mut policy = RetryPolicy {
            max_retries,
            ..Default::default()
        };
        if let Some(secs) = self.max_retry_interval_secs {
            policy.max_interval = Duration::from_secs(secs);
        }
        Some(policy)
    }
}

fn config_files() -> Vec<PathBuf> {
    if let Ok(dir) = env::var(GCAT_CONFIG_DIR_VAR) {
        debug!("`${GCAT_CONFIG_DIR_VAR}` set: {dir}");
        return vec![PathBuf::from(dir).join(GCAT_CONFIG_FILE)];
    }

    let dirs = BaseDirectories::with_prefix(GCAT_DIR_NAME);
    // lowest priority first
    let mut files = dirs.find_config_files(GCAT_CONFIG_FILE).collect::<Vec<_>>();
    files.reverse();
    files
}
