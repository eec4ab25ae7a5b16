// src/resolve.rs

use std::future::Future;

use reqwest::Client;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::debug;
use url::Url;

static SEARCH_URL: &str = "https://www.ewg.org/tapwater/search-results.php";
static DETAIL_BASE_URL: &str = "https://www.ewg.org/tapwater/";

/// A matched water utility: display name plus its detail-page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utility {
    pub name: String,
    pub detail_url: String,
}

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("utility search for ZIP {zip} failed: {source}")]
    Http {
        zip: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("featured utility block for ZIP {zip} is missing its `{element}` element")]
    MalformedResult { zip: String, element: &'static str },
}

/// Maps a ZIP code to its featured water utility, or `None` when the search
/// has no match. Implementations own whatever session or client they need;
/// the pipeline depends only on this contract.
pub trait Resolver {
    fn resolve(
        &self,
        zip_code: &str,
    ) -> impl Future<Output = Result<Option<Utility>, ResolutionError>>;
}

/// Resolver backed by the EWG tapwater ZIP search page over plain HTTP.
pub struct EwgResolver {
    client: Client,
}

impl EwgResolver {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Resolver for EwgResolver {
    async fn resolve(&self, zip_code: &str) -> Result<Option<Utility>, ResolutionError> {
        let url = format!("{SEARCH_URL}?zip5={zip_code}&searchtype=zip");
        debug!(zip = %zip_code, %url, "searching for utility");
        let http_err = |source| ResolutionError::Http {
            zip: zip_code.to_string(),
            source,
        };
        let html = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(http_err)?
            .error_for_status()
            .map_err(http_err)?
            .text()
            .await
            .map_err(http_err)?;
        parse_search_results(&html, zip_code)
    }
}

/// Pull the featured utility out of a search-results page. No featured
/// block means no match; a featured block missing its name or link is a
/// resolution failure.
pub fn parse_search_results(
    html: &str,
    zip_code: &str,
) -> Result<Option<Utility>, ResolutionError> {
    let featured_sel = Selector::parse("div.featured-utility")
        .expect("CSS selector for featured utility should be valid");
    let name_sel = Selector::parse("h2").expect("CSS selector for utility name should be valid");
    let link_sel = Selector::parse("a.primary-btn")
        .expect("CSS selector for utility link should be valid");

    let doc = Html::parse_document(html);
    let Some(featured) = doc.select(&featured_sel).next() else {
        return Ok(None);
    };

    let malformed = |element| ResolutionError::MalformedResult {
        zip: zip_code.to_string(),
        element,
    };
    let name = featured
        .select(&name_sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or_else(|| malformed("h2"))?;
    let href = featured
        .select(&link_sel)
        .next()
        .and_then(|el| el.value().attr("href"))
        .ok_or_else(|| malformed("a.primary-btn"))?;

    let base = Url::parse(DETAIL_BASE_URL).expect("detail base URL should be valid");
    let detail_url = base
        .join(href)
        .map_err(|_| malformed("a.primary-btn[href]"))?
        .to_string();

    Ok(Some(Utility { name, detail_url }))
}
