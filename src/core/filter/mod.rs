//! Selects the feed items published on the UTC calendar day of a given instant.
//!
//! Days are compared by year/month/day after conversion to UTC, never as a
//! rolling 24-hour window. Items without a published timestamp never match.

use chrono::{DateTime, NaiveDate, Utc};

use super::feed::types::FeedItem;

pub fn utc_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}

pub fn is_published_on(item: &FeedItem, day: NaiveDate) -> bool {
    item.published.is_some_and(|published| utc_day(published) == day)
}

/// Returns clones of the items published on the UTC day of `now`, in input order.
pub fn filter_published_today(items: &[FeedItem], now: DateTime<Utc>) -> Vec<FeedItem> {
    let today = utc_day(now);
    items
        .iter()
        .filter(|item| is_published_on(item, today))
        .cloned()
        .collect()
}

/// Owning variant of [`filter_published_today`].
pub fn into_published_today(items: Vec<FeedItem>, now: DateTime<Utc>) -> Vec<FeedItem> {
    let today = utc_day(now);
    items
        .into_iter()
        .filter(|item| is_published_on(item, today))
        .collect()
}
