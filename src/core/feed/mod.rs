pub mod fetcher;
pub mod parser;
pub mod types;

use fetcher::{fetch_feed, FetchError};
use parser::{parse_feed_bytes, parse_feed_str, FeedParseError};
use types::ParsedFeed;

#[derive(Debug, thiserror::Error)]
pub enum FeedSourceError {
    #[error("failed to fetch feed: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to parse feed: {0}")]
    Parse(#[from] FeedParseError),
}

pub async fn fetch_from_url(
    client: &reqwest::Client,
    url: &str,
) -> Result<ParsedFeed, FeedSourceError> {
    let payload = fetch_feed(client, url).await?;
    let feed = parse_feed_bytes(&payload.body)?;
    Ok(feed)
}

pub fn fetch_from_text(raw: &str) -> Result<ParsedFeed, FeedParseError> {
    parse_feed_str(raw)
}
