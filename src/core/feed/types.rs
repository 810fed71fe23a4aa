use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FeedFormat {
    XmlFeed,
    JsonFeed,
}

/// One entry of a parsed feed. `published` is normalized to UTC and is
/// `None` when the source omits the date or it cannot be parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedFeed {
    pub format: FeedFormat,
    pub title: String,
    pub home_page_url: Option<String>,
    pub items: Vec<FeedItem>,
}
