pub mod config;
pub mod feed;
pub mod filter;
pub mod report;

use std::time::Duration;

use chrono::{DateTime, Utc};

use config::ReaderConfig;
use feed::parser::FeedParseError;
use feed::types::FeedItem;
use feed::{fetch_from_text, fetch_from_url, FeedSourceError};
use filter::into_published_today;

#[derive(Debug, thiserror::Error)]
pub enum ReaderError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("error reading feed: {0}")]
    Source(#[from] FeedSourceError),
    #[error("error parsing feed text: {0}")]
    Parse(#[from] FeedParseError),
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Fetches a feed and keeps the posts published on the current UTC day.
#[derive(Debug, Clone)]
pub struct ChangelogReader {
    client: reqwest::Client,
}

impl ChangelogReader {
    pub fn new(config: &ReaderConfig) -> Result<Self, ReaderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn todays_posts(&self, url: &str) -> Result<Vec<FeedItem>, ReaderError> {
        self.todays_posts_at(url, Utc::now()).await
    }

    pub async fn todays_posts_at(
        &self,
        url: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<FeedItem>, ReaderError> {
        let feed = fetch_from_url(&self.client, url).await?;
        tracing::debug!(url, feed = %feed.title, items = feed.items.len(), "parsed feed");
        Ok(select_todays(feed.items, now))
    }

    pub fn todays_posts_from_text(&self, raw: &str) -> Result<Vec<FeedItem>, ReaderError> {
        self.todays_posts_from_text_at(raw, Utc::now())
    }

    pub fn todays_posts_from_text_at(
        &self,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<FeedItem>, ReaderError> {
        let feed = fetch_from_text(raw)?;
        tracing::debug!(feed = %feed.title, items = feed.items.len(), "parsed feed text");
        Ok(select_todays(feed.items, now))
    }
}

fn select_todays(items: Vec<FeedItem>, now: DateTime<Utc>) -> Vec<FeedItem> {
    let total = items.len();
    let todays = into_published_today(items, now);
    tracing::debug!(
        total,
        matched = todays.len(),
        day = %filter::utc_day(now),
        "filtered feed items by UTC day"
    );
    todays
}
