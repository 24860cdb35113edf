use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::redirect;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{CrawlError, Result};

const MAX_REDIRECTS: usize = 10;

#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    url: String,
}

impl Fetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .default_headers(request_headers(config)?)
            .timeout(config.timeout())
            .build()?;

        Ok(Fetcher {
            client,
            url: config.target_url.clone(),
        })
    }

    /// Fetch the page body. Non-2xx responses are still returned as text.
    pub async fn fetch_html(&self) -> Result<String> {
        let resp = self.client.get(&self.url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "upstream returned non-success status");
        }

        let body = resp.text().await?;
        info!(url = %self.url, %status, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

fn request_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let ua = HeaderValue::from_str(&config.user_agent)
        .map_err(|e| CrawlError::Config(format!("invalid user agent: {e}")))?;
    headers.insert(USER_AGENT, ua);
    Ok(headers)
}
