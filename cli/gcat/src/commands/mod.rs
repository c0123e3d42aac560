mod artifacts;
mod entries;
mod pricing;

use std::fmt;

use anyhow::{Context, Result};
use bpaf::Bpaf;
use global_catalog::{GlobalCatalogClient, GlobalCatalogConfig, DEFAULT_SERVICE_NAME};
use indoc::indoc;
use tracing::debug;

use crate::config::Config;

static GCAT_DESCRIPTION: &'_ str = indoc! {"
    Browse and manage entries of the IBM Cloud Global Catalog.\n\n

    Credentials are read from GLOBAL_CATALOG_* environment variables
    or an ibm-credentials.env file."
};

fn vec_len<T>(x: Vec<T>) -> usize {
    Vec::len(&x)
}

#[derive(Bpaf, Clone, Copy, Debug, PartialEq)]
pub enum Verbosity {
    Verbose(
        /// Increase logging verbosity
        ///
        /// Invoke multiple times for increasing detail.
        #[bpaf(short('v'), long("verbose"), req_flag(()), many, map(vec_len))]
        usize,
    ),

    /// Silence logs except for errors
    #[bpaf(short, long)]
    Quiet,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Verbose(0)
    }
}

#[derive(Bpaf)]
#[bpaf(options, descr(GCAT_DESCRIPTION))]
pub struct GcatCli(#[bpaf(external(gcat_args))] pub GcatArgs);

/// Main gcat args parser
#[derive(Debug, Bpaf)]
#[bpaf(ignore_rustdoc)]
pub struct GcatArgs {
    #[bpaf(external, fallback(Default::default()))]
    pub verbosity: Verbosity,

    /// Account to scope requests to
    #[bpaf(long, argument("ACCOUNT"))]
    pub account: Option<String>,

    #[bpaf(external(commands))]
    command: Commands,
}

impl GcatArgs {
    pub async fn handle(self, config: Config) -> Result<()> {
        let client = catalog_client(&config)?;
        let session = Session {
            client,
            account: self.account.or(config.account.clone()),
            page_limit: config.page_limit,
        };
        debug!(?session, "running command");

        match self.command {
            Commands::List(args) => args.handle(&session).await,
            Commands::Get(args) => args.handle(&session).await,
            Commands::Children(args) => args.handle(&session).await,
            Commands::Logs(args) => args.handle(&session).await,
            Commands::Visibility(args) => args.handle(&session).await,
            Commands::Delete(args) => args.handle(&session).await,
            Commands::Restore(args) => args.handle(&session).await,
            Commands::Pricing(args) => args.handle(&session).await,
            Commands::Deployments(args) => args.handle(&session).await,
            Commands::Artifacts(args) => args.handle(&session).await,
            Commands::Download(args) => args.handle(&session).await,
            Commands::Upload(args) => args.handle(&session).await,
        }
    }
}

/// Everything a command needs to talk to the catalog.
#[derive(Debug)]
pub(crate) struct Session {
    pub client: GlobalCatalogClient,
    pub account: Option<String>,
    /// Default limit for listings
    pub page_limit: global_catalog::ListLimit,
}

/// Create a client from the external service configuration,
/// with the user's config on top.
fn catalog_client(config: &Config) -> Result<GlobalCatalogClient> {
    let mut catalog_config = GlobalCatalogConfig::from_external(DEFAULT_SERVICE_NAME)
        .context("Could not configure the Global Catalog client")?;

    if let Some(service_url) = &config.service_url {
        catalog_config.service_url = service_url.clone();
    }
    if let Some(policy) = config.retry_policy() {
        catalog_config.retries = Some(policy);
    }
    catalog_config.user_agent = Some(format!("gcat/{}", env!("CARGO_PKG_VERSION")));

    Ok(GlobalCatalogClient::new(catalog_config)?)
}

#[derive(Bpaf, Clone)]
enum Commands {
    /// List catalog entries
    #[bpaf(command)]
    List(#[bpaf(external(entries::list))] entries::List),

    /// Show a catalog entry
    #[bpaf(command)]
    Get(#[bpaf(external(entries::get))] entries::Get),

    /// List the children of a catalog entry
    #[bpaf(command)]
    Children(#[bpaf(external(entries::children))] entries::Children),

    /// Show the audit log of a catalog entry
    #[bpaf(command)]
    Logs(#[bpaf(external(entries::logs))] entries::Logs),

    /// Show who can see a catalog entry
    #[bpaf(command)]
    Visibility(#[bpaf(external(entries::visibility))] entries::Visibility),

    /// Delete a catalog entry
    #[bpaf(command)]
    Delete(#[bpaf(external(entries::delete))] entries::Delete),

    /// Restore a deleted catalog entry
    #[bpaf(command)]
    Restore(#[bpaf(external(entries::restore))] entries::Restore),

    /// Show the pricing of a plan or deployment
    #[bpaf(command)]
    Pricing(#[bpaf(external(pricing::pricing))] pricing::Pricing),

    /// List the pricing of all deployments of a plan
    #[bpaf(command)]
    Deployments(#[bpaf(external(pricing::deployments))] pricing::Deployments),

    /// List the artifacts of a catalog object
    #[bpaf(command)]
    Artifacts(#[bpaf(external(artifacts::artifacts))] artifacts::Artifacts),

    /// Download an artifact
    #[bpaf(command)]
    Download(#[bpaf(external(artifacts::download))] artifacts::Download),

    /// Upload an artifact
    #[bpaf(command)]
    Upload(#[bpaf(external(artifacts::upload))] artifacts::Upload),
}

impl fmt::Debug for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command")
    }
}

/// Print `value` as pretty JSON to stdout.
pub(crate) fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
