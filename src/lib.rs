pub mod core;

use std::io::Write;

use chrono::{DateTime, Utc};

pub use crate::core::config::ReaderConfig;
pub use crate::core::feed::types::{FeedFormat, FeedItem, ParsedFeed};
pub use crate::core::{ChangelogReader, ReaderError};

use crate::core::report::write_report;

/// Reads the configured feed once and writes the report of today's posts.
///
/// Returns the number of posts reported.
pub async fn run<W: Write>(config: &ReaderConfig, out: &mut W) -> Result<usize, ReaderError> {
    run_at(config, Utc::now(), out).await
}

/// Same as [`run`], with "today" taken from `now` instead of the system clock.
pub async fn run_at<W: Write>(
    config: &ReaderConfig,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<usize, ReaderError> {
    let reader = ChangelogReader::new(config)?;
    let posts = reader.todays_posts_at(&config.feed_url, now).await?;
    tracing::info!(
        feed_url = %config.feed_url,
        posts = posts.len(),
        "found posts published today"
    );

    write_report(out, &posts)?;
    out.flush()?;
    Ok(posts.len())
}
