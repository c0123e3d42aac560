use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::Bpaf;
use global_catalog::types::{GetArtifactOptions, ListArtifactsOptions, UploadArtifactOptions};
use global_catalog::{ArtifactError, GlobalCatalog};
use tracing::{debug, instrument};

use super::{print_json, Session};
use crate::utils::message;
use crate::utils::table::{self, cell};

fn render_artifacts(artifacts: &global_catalog::types::Artifacts) -> String {
    let rows = artifacts
        .resources
        .iter()
        .map(|artifact| {
            [
                cell(artifact.name.as_deref()),
                cell(artifact.size),
                cell(artifact.updated.map(|time| time.to_rfc3339())),
            ]
        })
        .collect::<Vec<_>>();
    table::render(["NAME", "SIZE", "UPDATED"], &rows)
}

fn not_found(object_id: &str, artifact_id: Option<&str>, err: ArtifactError) -> anyhow::Error {
    match (err, artifact_id) {
        (ArtifactError::NotFound, Some(artifact_id)) => {
            anyhow::anyhow!("Artifact '{artifact_id}' of '{object_id}' not found")
        },
        (ArtifactError::NotFound, None) => anyhow::anyhow!("Catalog object '{object_id}' not found"),
        (other, _) => other.into(),
    }
}

// List the artifacts of a catalog object
#[derive(Bpaf, Clone)]
pub struct Artifacts {
    /// Print the artifacts as JSON
    #[bpaf(long)]
    json: bool,

    #[bpaf(positional("ID"))]
    object_id: String,
}

impl Artifacts {
    #[instrument(name = "artifacts", fields(object_id = self.object_id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = ListArtifactsOptions {
            account: session.account.clone(),
            ..ListArtifactsOptions::new(&self.object_id)
        };
        let artifacts = session
            .client
            .artifacts(options)
            .await
            .map_err(|e| not_found(&self.object_id, None, e))?;

        if self.json {
            return print_json(&artifacts);
        }
        print!("{}", render_artifacts(&artifacts));
        Ok(())
    }
}

// Download an artifact
#[derive(Bpaf, Clone)]
pub struct Download {
    /// Write the artifact to FILE instead of stdout
    #[bpaf(short, long, argument("FILE"))]
    output: Option<PathBuf>,

    #[bpaf(positional("ID"))]
    object_id: String,

    #[bpaf(positional("ARTIFACT"))]
    artifact_id: String,
}

impl Download {
    #[instrument(name = "download", fields(object_id = self.object_id, artifact_id = self.artifact_id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let options = GetArtifactOptions {
            account: session.account.clone(),
            ..GetArtifactOptions::new(&self.object_id, &self.artifact_id)
        };
        let content = session
            .client
            .download_artifact(options)
            .await
            .map_err(|e| not_found(&self.object_id, Some(&self.artifact_id), e))?;

        match self.output {
            Some(path) => {
                tokio::fs::write(&path, &content)
                    .await
                    .with_context(|| format!("Could not write '{}'", path.display()))?;
                debug!(path = %path.display(), size = content.len(), "wrote artifact");
                message::created(format!(
                    "Downloaded '{}' to '{}'",
                    self.artifact_id,
                    path.display()
                ));
            },
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(&content)?;
                stdout.flush()?;
            },
        }
        Ok(())
    }
}

// Upload an artifact
#[derive(Bpaf, Clone)]
pub struct Upload {
    /// Media type of the artifact (default: application/octet-stream)
    #[bpaf(long, argument("TYPE"))]
    content_type: Option<String>,

    #[bpaf(positional("ID"))]
    object_id: String,

    #[bpaf(positional("ARTIFACT"))]
    artifact_id: String,

    /// File to upload
    #[bpaf(positional("FILE"))]
    file: PathBuf,
}

impl Upload {
    #[instrument(name = "upload", fields(object_id = self.object_id, artifact_id = self.artifact_id), skip_all)]
    pub async fn handle(self, session: &Session) -> Result<()> {
        let content = tokio::fs::read(&self.file)
            .await
            .with_context(|| format!("Could not read '{}'", self.file.display()))?;

        let options = UploadArtifactOptions {
            account: session.account.clone(),
            content_type: self.content_type,
            ..UploadArtifactOptions::new(&self.object_id, &self.artifact_id, content)
        };
        session
            .client
            .upload_artifact(options)
            .await
            .map_err(|e| not_found(&self.object_id, None, e))?;
        message::updated(format!(
            "Uploaded '{}' as artifact '{}'",
            self.file.display(),
            self.artifact_id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use global_catalog::types::ErrorResponse;
    use global_catalog_api_v1::mock::MockServerExt;
    use httpmock::MockServer;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::tests::session;

    #[tokio::test]
    async fn download_to_file() {
        let server = MockServer::start_async().await;
        let mock = server.get_artifact(|when, then| {
            when.object_id("object").artifact_id("logo.svg");
            then.ok("image/svg+xml", b"<svg/>");
        });
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.svg");

        Download {
            output: Some(path.clone()),
            object_id: "object".to_string(),
            artifact_id: "logo.svg".to_string(),
        }
        .handle(&session(&server))
        .await
        .unwrap();

        mock.assert();
        assert_eq!(std::fs::read(path).unwrap(), b"<svg/>");
    }

    #[tokio::test]
    async fn upload_from_file() {
        let server = MockServer::start_async().await;
        let mock = server.upload_artifact(|when, then| {
            let when = when.object_id("object").artifact_id("notes.txt").body(b"hello");
            when.into_inner().header("content-type", "text/plain");
            then.ok();
        });
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"hello").unwrap();

        Upload {
            content_type: Some("text/plain".to_string()),
            object_id: "object".to_string(),
            artifact_id: "notes.txt".to_string(),
            file: file.path().to_path_buf(),
        }
        .handle(&session(&server))
        .await
        .unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn missing_artifact_is_reported() {
        let server = MockServer::start_async().await;
        server.get_artifact(|_, then| {
            then.not_found(&ErrorResponse::default());
        });

        let err = Download {
            output: None,
            object_id: "object".to_string(),
            artifact_id: "missing".to_string(),
        }
        .handle(&session(&server))
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Artifact 'missing' of 'object' not found");
    }
}
