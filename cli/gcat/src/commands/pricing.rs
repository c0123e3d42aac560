use anyhow::Result;
use bpaf::Bpaf;
use global_catalog::types::{GetPricingDeploymentsOptions, GetPricingOptions, PricingSearchResult};
use global_catalog::{EntryError, GlobalCatalog};
use tracing::instrument;

use super::{print_json, Session};
use crate::utils::table::{self, cell};

fn render_deployments(result: &PricingSearchResult) -> String {
    let rows = result
        .resources
        .iter()
        .map(|pricing| {
            [
                cell(pricing.deployment_id.as_deref()),
                cell(pricing.deployment_region.as_deref()),
                cell(pricing.deployment_location.as_deref()),
                cell(pricing.type_.as_deref()),
                pricing.metrics.len().to_string(),
            ]
        })
        .collect::<Vec<_>>();
    table::render(["DEPLOYMENT", "REGION", "LOCATION", "TYPE", "METRICS"], &rows)
}

fn not_found(id: &str, err: EntryError) -> anyhow::Error {
    match err {
        EntryError::NotFound => anyhow::anyhow!("No pricing found for '{id}'"),
        other => other.into(),
    }
}

// Show the pricing of a plan or deployment
#[derive(Bpaf, Clone)]
pub struct Pricing {
    /// Pricing of this deployment of the plan
    #[bpaf(long, argument("DEPLOYMENT"))]
    deployment_id: Option<String>,

    /// Pricing in this region
    #[bpaf(long, argument("REGION"))]
    region: Option<String>,

    /// Pricing in this location
    #[bpaf(long, argument("LOCATION"))]
    location: Option<String>,

    #[bpaf(positional("ID"))]
    id: String,
}

impl Pricing {
    #[instrument(name = "pricing", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetPricingOptions {
            account: session.account.clone(),
            deployment_id: self.deployment_id,
            deployment_region: self.region,
            deployment_location: self.location,
            ..GetPricingOptions::new(&self.id)
        };
        let pricing = session
            .client
            .pricing(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;
        print_json(&pricing)
    }
}

// List the pricing of all deployments of a plan
#[derive(Bpaf, Clone)]
pub struct Deployments {
    /// Print the deployments as JSON
    #[bpaf(long)]
    json: bool,

    #[bpaf(positional("ID"))]
    id: String,
}

impl Deployments {
    #[instrument(name = "deployments", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetPricingDeploymentsOptions {
            account: session.account.clone(),
            ..GetPricingDeploymentsOptions::new(&self.id)
        };
        let result = session
            .client
            .pricing_deployments(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;

        if self.json {
            return print_json(&result);
        }
        print!("{}", render_deployments(&result));
        Ok(())
    }
}
