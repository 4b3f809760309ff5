//! Manual-page retrieval: local viewer first, web fallback second.
//!
//! Retrieval is synchronous and makes no retries. The local path runs
//! `man <command>` piped through `col -b` to strip formatting characters
//! and waits for completion; the web path performs one GET with a fixed
//! timeout and extracts the text of the page's content container.

use std::process::{Command, Stdio};
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::html;

/// Fixed host serving rendered manual pages for the web fallback.
pub const WEB_HOST: &str = "linux.die.net";

/// Timeout applied to the whole web fetch.
pub const WEB_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single source could not produce page text.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Spawning or reading a viewer process failed.
    #[error("failed to run viewer: {0}")]
    Io(#[from] std::io::Error),
    /// The viewer pipeline exited unsuccessfully.
    #[error("viewer exited unsuccessfully")]
    ViewerFailed,
    /// The viewer ran but produced nothing (or only whitespace).
    #[error("viewer produced no output")]
    EmptyOutput,
    /// The web endpoint answered with a non-success status.
    #[error("request failed with status {0}")]
    HttpStatus(u16),
    /// The web request could not complete.
    #[error("transport error: {0}")]
    Transport(String),
    /// The fetched page had no recognizable content container.
    #[error("no recognizable man page content in response")]
    NoContent,
}

/// Neither the local viewer nor the web fallback produced page text.
#[derive(Debug, Error)]
#[error("could not retrieve a man page for '{command}': {source}")]
pub struct RetrieveError {
    /// Command the retrieval was attempted for.
    pub command: String,
    /// The web fallback's failure (the local failure was already logged).
    #[source]
    pub source: SourceError,
}

/// A provider of raw manual-page text for a command.
pub trait PageSource {
    /// Returns raw page text for `command`, or why it was unavailable.
    fn fetch(&self, command: &str) -> Result<String, SourceError>;
}

/// Local documentation viewer: `man <command>` piped through `col -b`.
#[derive(Debug, Default)]
pub struct LocalViewer;

impl PageSource for LocalViewer {
    fn fetch(&self, command: &str) -> Result<String, SourceError> {
        let mut man = Command::new("man")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;
        let Some(man_stdout) = man.stdout.take() else {
            let _ = man.kill();
            let _ = man.wait();
            return Err(SourceError::ViewerFailed);
        };

        let col = Command::new("col")
            .arg("-b")
            .stdin(Stdio::from(man_stdout))
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn();
        let col = match col {
            Ok(child) => child,
            Err(err) => {
                let _ = man.kill();
                let _ = man.wait();
                return Err(SourceError::Io(err));
            }
        };

        let output = col.wait_with_output()?;
        let _ = man.wait();

        if !output.status.success() {
            return Err(SourceError::ViewerFailed);
        }
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(SourceError::EmptyOutput);
        }
        Ok(text)
    }
}

/// Web fallback: fetches the rendered page over HTTP and extracts the text
/// of its content container.
pub struct WebViewer {
    agent: ureq::Agent,
}

impl WebViewer {
    /// Creates a viewer with the fixed fetch timeout.
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().timeout(WEB_TIMEOUT).build(),
        }
    }
}

impl Default for WebViewer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for WebViewer {
    fn fetch(&self, command: &str) -> Result<String, SourceError> {
        let url = format!("https://{WEB_HOST}/man/1/{command}");
        eprintln!("Fetching man page from {url}...");

        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => SourceError::HttpStatus(code),
            ureq::Error::Transport(transport) => SourceError::Transport(transport.to_string()),
        })?;
        let body = response
            .into_string()
            .map_err(|err| SourceError::Transport(err.to_string()))?;

        html::content_text(&body).ok_or(SourceError::NoContent)
    }
}

/// Retrieves raw page text for `command`.
///
/// `local` is tried first. When it fails or returns only whitespace, `web`
/// is tried exactly once; its failure is the failure of the whole
/// retrieval.
pub fn retrieve(
    command: &str,
    local: &dyn PageSource,
    web: &dyn PageSource,
) -> Result<String, RetrieveError> {
    match local.fetch(command) {
        Ok(text) if !text.trim().is_empty() => return Ok(text),
        Ok(_) => debug!(command, "local viewer returned only whitespace"),
        Err(err) => debug!(command, error = %err, "local viewer failed"),
    }

    eprintln!("Local man page not found for '{command}', trying web...");
    web.fetch(command).map_err(|source| RetrieveError {
        command: command.to_string(),
        source,
    })
}
