// src/fetch.rs

use std::future::Future;

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
#[error("GET {url} failed: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Retrieves the raw body of one utility detail page.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Plain single-shot HTTP fetcher. A failed location is dropped for the
/// run, so there is no retry loop here.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "fetching detail page");
        let err = |source| FetchError {
            url: url.to_string(),
            source,
        };
        self.client
            .get(url)
            .send()
            .await
            .map_err(err)?
            .error_for_status()
            .map_err(err)?
            .text()
            .await
            .map_err(err)
    }
}
