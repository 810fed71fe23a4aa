use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use serde::Deserialize;

use super::types::{FeedFormat, FeedItem, ParsedFeed};

#[derive(Debug, thiserror::Error)]
pub enum FeedParseError {
    #[error("feed payload is empty")]
    EmptyPayload,
    #[error("xml feed parse error: {0}")]
    Xml(#[from] feed_rs::parser::ParseFeedError),
    #[error("json feed parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
struct JsonFeed {
    title: Option<String>,
    home_page_url: Option<String>,
    #[serde(default)]
    items: Vec<JsonFeedItem>,
}

#[derive(Debug, Clone, Deserialize)]
struct JsonFeedItem {
    title: Option<String>,
    url: Option<String>,
    date_published: Option<String>,
}

pub fn parse_feed_str(raw: &str) -> Result<ParsedFeed, FeedParseError> {
    parse_feed_bytes(raw.as_bytes())
}

pub fn parse_feed_bytes(raw: &[u8]) -> Result<ParsedFeed, FeedParseError> {
    let trimmed = trim_leading_ascii_whitespace(raw);
    if trimmed.is_empty() {
        return Err(FeedParseError::EmptyPayload);
    }
    if trimmed[0] == b'{' {
        return parse_json_feed(trimmed);
    }
    parse_xml_feed(trimmed)
}

fn parse_xml_feed(raw: &[u8]) -> Result<ParsedFeed, FeedParseError> {
    let feed = feed_rs::parser::parse(raw)?;
    let title = feed
        .title
        .as_ref()
        .map(|text| text.content.clone())
        .unwrap_or_else(|| "Untitled Feed".to_string());
    let home_page_url = feed.links.first().map(|link| link.href.clone());
    let items = feed.entries.iter().map(item_from_xml).collect();

    Ok(ParsedFeed {
        format: FeedFormat::XmlFeed,
        title,
        home_page_url,
        items,
    })
}

fn parse_json_feed(raw: &[u8]) -> Result<ParsedFeed, FeedParseError> {
    let feed: JsonFeed = serde_json::from_slice(raw)?;
    let title = feed.title.unwrap_or_else(|| "Untitled Feed".to_string());
    let items = feed
        .items
        .into_iter()
        .map(|item| FeedItem {
            title: item.title.unwrap_or_else(|| "Untitled Entry".to_string()),
            link: item.url.unwrap_or_default(),
            published: item.date_published.as_deref().and_then(parse_rfc3339_utc),
        })
        .collect();

    Ok(ParsedFeed {
        format: FeedFormat::JsonFeed,
        title,
        home_page_url: feed.home_page_url,
        items,
    })
}

// feed-rs already hands back UTC timestamps; RSS `pubDate` lands in `published`,
// Atom entries without one fall back to `updated`.
fn item_from_xml(entry: &Entry) -> FeedItem {
    let title = entry
        .title
        .as_ref()
        .map(|text| text.content.clone())
        .unwrap_or_else(|| "Untitled Entry".to_string());
    let link = entry
        .links
        .first()
        .map(|entry_link| entry_link.href.clone())
        .unwrap_or_default();

    FeedItem {
        title,
        link,
        published: entry.published.or(entry.updated),
    }
}

fn parse_rfc3339_utc(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}

fn trim_leading_ascii_whitespace(raw: &[u8]) -> &[u8] {
    let mut index = 0;
    while index < raw.len() && raw[index].is_ascii_whitespace() {
        index += 1;
    }
    &raw[index..]
}
