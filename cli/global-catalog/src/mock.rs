//! Record and replay of API interactions for integration testing.
//!
//! Only available with the `mock` feature.

use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;

use httpmock::{MockServer, RecordingID};
use tracing::{debug, warn};
use url::Url;

use crate::config::GlobalCatalogMockMode;

/// Guard to keep a `MockServer` running until the `GlobalCatalogClient` is
/// dropped.
#[allow(dead_code)] // https://github.com/rust-lang/rust/issues/122833
pub(crate) enum MockGuard {
    Record(MockRecorder),
    Replay(MockServer),
}

/// Scheme, host and port of `url`, which is what the mock server forwards to.
fn origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

impl MockGuard {
    pub(crate) fn new(mock_mode: &GlobalCatalogMockMode, service_url: &Url) -> Option<Self> {
        match mock_mode {
            GlobalCatalogMockMode::None => None,
            GlobalCatalogMockMode::Record(path) => {
                let server = MockServer::start();
                let target = origin(service_url);
                let recording = start_recording(&server, &target);

                debug!(?path, server = server.base_url(), %target, "mock server recording");
                Some(MockGuard::Record(MockRecorder {
                    path: path.to_path_buf(),
                    target,
                    server,
                    recording,
                }))
            },
            GlobalCatalogMockMode::Replay(path) => {
                let server = MockServer::start();
                server.playback(path);
                debug!(?path, server = server.base_url(), "mock server replaying");

                Some(MockGuard::Replay(server))
            },
        }
    }

    /// The URL requests for `service_url` should be sent to instead.
    ///
    /// The mock server only replaces the origin, the path of the service URL
    /// is kept.
    pub(crate) fn url(&self, service_url: &Url) -> String {
        let server = match self {
            MockGuard::Record(recorder) => &recorder.server,
            MockGuard::Replay(server) => server,
        };
        format!(
            "{}{}",
            server.base_url(),
            service_url.path().trim_end_matches('/')
        )
    }

    /// Clear everything that has been recorded up to this point.
    ///
    /// This is useful in tests where you need to perform some setup that
    /// you don't want to be included as part of the recording.
    pub fn reset_recording(&mut self) {
        if let MockGuard::Record(MockRecorder {
            server,
            target,
            recording,
            ..
        }) = self
        {
            server.reset();
            *recording = start_recording(server, target);
        }
    }
}

fn start_recording(server: &MockServer, target: &str) -> RecordingID {
    server.forward_to(target, |rule| {
        rule.filter(|when| {
            when.any_request();
        });
    });
    server.record(|rule| {
        rule.filter(|when| {
            when.any_request();
        });
    })
}

impl Debug for MockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (mode, url) = match self {
            MockGuard::Record(recorder) => ("MockGuard::Record", recorder.server.base_url()),
            MockGuard::Replay(server) => ("MockGuard::Replay", server.base_url()),
        };
        write!(f, "{mode} url={url}")
    }
}

/// In addition to keeping a `MockServer` running, also write any recorded
/// requests to a file when dropped.
pub(crate) struct MockRecorder {
    pub(crate) path: PathBuf,
    pub(crate) target: String,
    pub(crate) server: MockServer,
    pub(crate) recording: RecordingID,
}

impl MockRecorder {
    fn save(&self) -> Result<(), String> {
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| format!("invalid recording path {}", self.path.display()))?;

        // `record_save` appends a timestamp, so we rename after write.
        // The prefix keeps parallel recordings from racing each other.
        let tempfile = self
            .server
            .record_save(&self.recording, format!("httpmock_{file_name}"))
            .map_err(|e| e.to_string())?;
        debug!(
            src = %tempfile.as_path().display(),
            dest = %self.path.as_path().display(),
            "renaming recorded mock file"
        );
        fs::rename(&tempfile, &self.path).map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Drop for MockRecorder {
    fn drop(&mut self) {
        match self.save() {
            Ok(()) => debug!(path = ?self.path, "saved mock recording"),
            Err(e) => warn!(path = ?self.path, "failed to save mock recording: {e}"),
        }
    }
}
