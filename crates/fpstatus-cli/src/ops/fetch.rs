//! Loading the status document.
//!
//! One unconditioned request per invocation: no retry, no timeout
//! policy, no caching. Parse failures and transport failures surface as
//! distinct [`FetchError`] variants so commands can report a terminal
//! "failed to load status" state instead of crashing.

use std::path::{Path, PathBuf};

use fpstatus_schema::StatusIndex;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed status document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the status document comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A local file path.
    File(PathBuf),
    /// An HTTP(S) URL.
    Url(String),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Load and parse the status document from the given source.
pub async fn load(source: &Source) -> Result<StatusIndex, FetchError> {
    let body = match source {
        Source::File(path) => read_file(path).await?,
        Source::Url(url) => fetch_url(url).await?,
    };

    let index: StatusIndex = serde_json::from_str(&body)?;
    debug!(flatpaks = index.flatpaks.len(), "parsed status document");
    Ok(index)
}

async fn read_file(path: &Path) -> Result<String, FetchError> {
    debug!(path = %path.display(), "reading status document");
    Ok(tokio::fs::read_to_string(path).await?)
}

async fn fetch_url(url: &str) -> Result<String, FetchError> {
    debug!(url, "fetching status document");
    let client = Client::new();
    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, crate::USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    Ok(resp.text().await?)
}
