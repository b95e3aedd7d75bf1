//! Generic page fetcher. Not used by the query pipeline itself; kept for
//! callers that want the full text behind a search result.

use reqwest::Client;
use tracing::{debug, warn};

use crate::consts::FETCH_TIMEOUT;
use crate::error::ProviderError;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body text. Non-2xx responses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String, ProviderError> {
        debug!(%url, "fetching content");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.text().await?)
    }

    /// Like [`Fetcher::fetch`], but a failure becomes an inline marker string.
    pub async fn fetch_or_marker(&self, url: &str) -> String {
        match self.fetch(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(%url, error = %e, "fetch failed");
                format!("[Error fetching content: {e}]")
            }
        }
    }
}
