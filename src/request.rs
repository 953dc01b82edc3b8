use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::table::PageId;
use crate::{Error, Result};

/// Somewhere chapter pages can be fetched from.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches `url` once and returns the page HTML.
    async fn fetch(&self, page: &PageId, url: &str) -> Result<String>;
}

/// Fetches pages over HTTP(S). One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, page: &PageId, url: &str) -> Result<String> {
        let fetch_err = |source: reqwest::Error| Error::Fetch {
            page: page.clone(),
            source,
        };

        let res = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status {
                page: page.clone(),
                status,
            });
        }
        let html = res.text().await.map_err(fetch_err)?;
        Ok(html)
    }
}
