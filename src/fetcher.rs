use reqwest::{Client, redirect};

use crate::config::ScrapeConfig;
use crate::error::{Result, ScrapeError};

const MAX_REDIRECTS: usize = 100;

/// A fetched HTML document and the URL it was finally served from.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self> {
        let redirect_policy = redirect::Policy::custom(|attempt| {
            if attempt.previous().len() > MAX_REDIRECTS {
                attempt.error("Too many redirects (>100)")
            } else {
                attempt.follow()
            }
        });

        let mut builder = Client::builder()
            .redirect(redirect_policy)
            .user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|source| ScrapeError::Request {
            url: config.target.clone(),
            source,
        })?;
        Ok(Self { client })
    }

    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        tracing::debug!(%url, "fetching page");
        let request_error = |source| ScrapeError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().to_string();
        let body = response.text().await.map_err(request_error)?;
        tracing::debug!(url = %final_url, bytes = body.len(), "fetched page");

        Ok(Page {
            url: final_url,
            body,
        })
    }
}
