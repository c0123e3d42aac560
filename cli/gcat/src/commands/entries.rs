use std::num::NonZeroU32;

use anyhow::{bail, Result};
use bpaf::Bpaf;
use global_catalog::types::{
    DeleteCatalogEntryOptions,
    GetAuditLogsOptions,
    GetCatalogEntryOptions,
    GetChildObjectsOptions,
    GetVisibilityOptions,
    ListCatalogEntriesOptions,
    RestoreCatalogEntryOptions,
};
use global_catalog::{AuditLog, CatalogEntries, CatalogEntry, EntryError, GlobalCatalog};
use tracing::instrument;

use super::{print_json, Session};
use crate::utils::message;
use crate::utils::table::{self, cell};

/// Print a listing as JSON or a table, with a hint if it was truncated.
fn print_entries(entries: &CatalogEntries, json: bool) -> Result<()> {
    if json {
        return print_json(entries);
    }
    print!("{}", render_entries(entries));
    print_truncation_hint(entries.results.len(), entries.count);
    Ok(())
}

fn print_truncation_hint(shown: usize, count: Option<u64>) {
    if let Some(count) = count.filter(|count| *count > shown as u64) {
        message::plain(format!(
            "Showing {shown} of {count} results. Use '--limit' to see more."
        ));
    }
}

fn display_name(entry: &CatalogEntry) -> Option<&str> {
    entry
        .overview_ui
        .get("en")
        .map(|overview| overview.display_name.as_str())
        .filter(|name| !name.is_empty())
}

fn render_entries(entries: &CatalogEntries) -> String {
    let rows = entries
        .results
        .iter()
        .map(|entry| {
            [
                cell(entry.id.as_deref()),
                cell(entry.kind.as_deref()),
                cell(entry.name.as_deref()),
                cell(display_name(entry)),
            ]
        })
        .collect::<Vec<_>>();
    table::render(["ID", "KIND", "NAME", "DISPLAY NAME"], &rows)
}

fn render_audit_log(log: &AuditLog) -> String {
    let rows = log
        .results
        .iter()
        .map(|entry| {
            [
                cell(entry.time.map(|time| time.to_rfc3339())),
                cell(entry.who_email.as_deref().or(entry.who_name.as_deref())),
                cell(entry.message.as_deref()),
            ]
        })
        .collect::<Vec<_>>();
    table::render(["TIME", "WHO", "MESSAGE"], &rows)
}

/// Turn the not found case into a readable error
fn not_found(id: &str, err: EntryError) -> anyhow::Error {
    match err {
        EntryError::NotFound => anyhow::anyhow!("Catalog entry '{id}' not found"),
        other => other.into(),
    }
}

// List catalog entries
#[derive(Bpaf, Clone)]
pub struct List {
    /// Print the entries as JSON
    #[bpaf(long)]
    json: bool,

    /// Search query, e.g. 'kind:service tag:ibm_created'
    #[bpaf(long("q"), argument("QUERY"))]
    query: Option<String>,

    /// Colon separated fields to include, e.g. 'metadata.ui:metadata.pricing'
    #[bpaf(long, argument("FIELDS"))]
    include: Option<String>,

    /// Show at most N entries
    #[bpaf(long, argument("N"))]
    limit: Option<NonZeroU32>,
}

impl List {
    #[instrument(name = "list", skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = ListCatalogEntriesOptions {
            account: session.account.clone(),
            q: self.query,
            include: self.include,
            ..Default::default()
        };
        let entries = session
            .client
            .list_entries(options, self.limit.or(session.page_limit))
            .await?;
        print_entries(&entries, self.json)
    }
}

// Show a catalog entry
#[derive(Bpaf, Clone)]
pub struct Get {
    /// Include children down to this depth
    #[bpaf(long, argument("DEPTH"))]
    depth: Option<i64>,

    /// Include all translations and metadata
    #[bpaf(long)]
    complete: bool,

    #[bpaf(positional("ID"))]
    id: String,
}

impl Get {
    #[instrument(name = "get", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetCatalogEntryOptions {
            account: session.account.clone(),
            depth: self.depth,
            complete: self.complete.then_some(true),
            ..GetCatalogEntryOptions::new(&self.id)
        };
        let entry = session
            .client
            .entry(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;
        print_json(&entry)
    }
}

// List the children of a catalog entry
#[derive(Bpaf, Clone)]
pub struct Children {
    /// Print the entries as JSON
    #[bpaf(long)]
    json: bool,

    /// Show at most N entries
    #[bpaf(long, argument("N"))]
    limit: Option<NonZeroU32>,

    #[bpaf(positional("ID"))]
    id: String,

    /// Kind of children to list, e.g. 'plan' or '*' for all
    #[bpaf(positional("KIND"))]
    kind: String,
}

impl Children {
    #[instrument(name = "children", fields(id = self.id, kind = self.kind), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetChildObjectsOptions {
            account: session.account.clone(),
            ..GetChildObjectsOptions::new(&self.id, &self.kind)
        };
        let entries = session
            .client
            .child_objects(options, self.limit.or(session.page_limit))
            .await
            .map_err(|e| not_found(&self.id, e))?;
        print_entries(&entries, self.json)
    }
}

// Show the audit log of a catalog entry
#[derive(Bpaf, Clone)]
pub struct Logs {
    /// Print the log as JSON
    #[bpaf(long)]
    json: bool,

    /// Show at most N log entries
    #[bpaf(long, argument("N"))]
    limit: Option<NonZeroU32>,

    #[bpaf(positional("ID"))]
    id: String,
}

impl Logs {
    #[instrument(name = "logs", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetAuditLogsOptions {
            account: session.account.clone(),
            ..GetAuditLogsOptions::new(&self.id)
        };
        let log = session
            .client
            .audit_logs(options, self.limit.or(session.page_limit))
            .await
            .map_err(|e| not_found(&self.id, e))?;

        if self.json {
            return print_json(&log);
        }
        print!("{}", render_audit_log(&log));
        print_truncation_hint(log.results.len(), log.count);
        Ok(())
    }
}

// Show the visibility of a catalog entry
#[derive(Bpaf, Clone)]
pub struct Visibility {
    #[bpaf(positional("ID"))]
    id: String,
}

impl Visibility {
    #[instrument(name = "visibility", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetVisibilityOptions {
            account: session.account.clone(),
            ..GetVisibilityOptions::new(&self.id)
        };
        let visibility = session
            .client
            .visibility(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;
        print_json(&visibility)
    }
}

// Delete a catalog entry
#[derive(Bpaf, Clone)]
pub struct Delete {
    /// Delete the entry and all of its children
    #[bpaf(short, long)]
    force: bool,

    #[bpaf(positional("ID"))]
    id: String,
}

impl Delete {
    #[instrument(name = "delete", fields(id = self.id, force = self.force), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        if self.id.is_empty() {
            bail!("Catalog entry ID must not be empty");
        }
        let options = DeleteCatalogEntryOptions {
            account: session.account.clone(),
            force: self.force.then_some(true),
            ..DeleteCatalogEntryOptions::new(&self.id)
        };
        session
            .client
            .delete_entry(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;
        message::deleted(format!("Catalog entry '{}' deleted", self.id));
        Ok(())
    }
}

// Restore a deleted catalog entry
#[derive(Bpaf, Clone)]
pub struct Restore {
    #[bpaf(positional("ID"))]
    id: String,
}

impl Restore {
    #[instrument(name = "restore", fields(id = self.id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = RestoreCatalogEntryOptions {
            account: session.account.clone(),
            ..RestoreCatalogEntryOptions::new(&self.id)
        };
        session
            .client
            .restore_entry(options)
            .await
            .map_err(|e| not_found(&self.id, e))?;
        message::updated(format!("Catalog entry '{}' restored", self.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use global_catalog::types::{EntrySearchResult, ErrorResponse, Overview};
    use global_catalog::ResultsPage;
    use global_catalog_api_v1::mock::MockServerExt;
    use httpmock::MockServer;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::tests::session;

    fn entry(id: &str, display_name: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id: Some(id.to_string()),
            name: Some(format!("{id}-name")),
            kind: Some("service".to_string()),
            overview_ui: display_name
                .map(|name| {
                    [("en".to_string(), Overview {
                        display_name: name.to_string(),
                        ..Default::default()
                    })]
                    .into()
                })
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    #[test]
    fn renders_entry_table() {
        let entries = ResultsPage {
            results: vec![entry("a", Some("Service A")), entry("bb", None)],
            count: Some(2),
        };
        assert_eq!(render_entries(&entries), indoc! {"
            ID  KIND     NAME     DISPLAY NAME
            a   service  a-name   Service A
            bb  service  bb-name  -
        "});
    }

    #[tokio::test]
    async fn list_sends_account_and_query() {
        let server = MockServer::start_async().await;
        let mock = server.list_catalog_entries(|when, then| {
            when.account("my-account").q("kind:service");
            then.ok(&EntrySearchResult {
                count: 1,
                resources: vec![entry("a", None)],
                ..Default::default()
            });
        });

        List {
            json: false,
            query: Some("kind:service".to_string()),
            include: None,
            limit: None,
        }
        .handle(&session(&server))
        .await
        .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn missing_entry_is_reported_by_id() {
        let server = MockServer::start_async().await;
        server.get_catalog_entry(|when, then| {
            when.id("missing");
            then.not_found(&ErrorResponse::default());
        });

        let err = Get {
            depth: None,
            complete: false,
            id: "missing".to_string(),
        }
        .handle(&session(&server))
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Catalog entry 'missing' not found");
    }

    #[tokio::test]
    async fn delete_forwards_force() {
        let server = MockServer::start_async().await;
        let mock = server.delete_catalog_entry(|when, then| {
            when.id("entry").force(true);
            then.ok();
        });

        Delete {
            force: true,
            id: "entry".to_string(),
        }
        .handle(&session(&server))
        .await
        .unwrap();
        mock.assert();
    }
}
