use crate::config::constants::FETCH_TIMEOUT_SECS;
use crate::network::errors::NetworkError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// * A fetched page, ready to hand to the profiling engine.
// * `final_url` reflects any redirects, so HTTPS detection and relative-URL
// * resolution operate on the address the HTML was actually served from.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub html: String,
}

// * The HTTP client used to retrieve a page body for analysis.
pub struct PageFetcher {
    inner: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self { inner: client })
    }

    // * Fetches a URL and returns its body text plus the final URL.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, NetworkError> {
        let parsed = Url::parse(url).map_err(|_| NetworkError::InvalidUrl)?;

        let resp = self.inner.get(parsed).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let final_url = resp.url().to_string();
        let html = resp.text().await?;

        if html.trim().is_empty() {
            return Err(NetworkError::EmptyResponse(html.len()));
        }

        tracing::debug!(url = %final_url, bytes = html.len(), "page fetched");

        Ok(FetchedPage { final_url, html })
    }
}
