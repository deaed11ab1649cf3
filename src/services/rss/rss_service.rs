use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use url::Url;

use super::parser::parse_entries;
use crate::models::RawEntry;

/// Something that turns a feed URL into raw entries
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches and parses the feed. Any error here is fatal for the run.
    async fn fetch_entries(&self, url: &Url) -> Result<Vec<RawEntry>>;
}

/// Fetches feeds over HTTP
pub struct RssService {
    client: Client,
}

impl RssService {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for RssService {
    async fn fetch_entries(&self, url: &Url) -> Result<Vec<RawEntry>> {
        debug!("Fetching feed {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to fetch feed {}", url))?
            .error_for_status()
            .with_context(|| format!("Feed {} returned an error status", url))?;
        let content = response.bytes().await?;

        let entries =
            parse_entries(&content[..]).with_context(|| format!("Failed to parse feed {}", url))?;

        info!("Fetched {} entries from {}", entries.len(), url);
        Ok(entries)
    }
}
