//! One-shot page fetching.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("malformed URL {url:?}: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid fetch config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Settings for the outbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Proxy for every request. `None` connects directly, ignoring any proxy
    /// set in the environment.
    pub proxy: Option<Url>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
        }
    }
}

impl FetchConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self, FetchError> {
        let f = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    pub fn with_proxy(mut self, proxy: Option<Url>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Response body plus a little about how it was obtained.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: Url,
    /// Not checked; any body is handed on as-is.
    pub status: u16,
    pub body: Vec<u8>,
}

/// GET `url` once and read the whole body.
///
/// No retries. The client is dropped on return, closing its idle connections.
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Result<FetchedPage, FetchError> {
    let parsed = Url::parse(url).map_err(|source| FetchError::MalformedUrl {
        url: url.to_string(),
        source,
    })?;

    let mut builder = reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str());
    builder = match &config.proxy {
        Some(proxy) => builder.proxy(reqwest::Proxy::all(proxy.as_str()).map_err(FetchError::Client)?),
        None => builder.no_proxy(),
    };
    let client = builder.build().map_err(FetchError::Client)?;

    let response = client.get(parsed.clone()).send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();

    debug!(
        target: "vocab.fetch",
        url = %parsed,
        status,
        bytes = body.len(),
        proxied = config.proxy.is_some(),
        "page fetched"
    );

    Ok(FetchedPage {
        url: parsed,
        status,
        body,
    })
}
