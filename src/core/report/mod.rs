use std::io::{self, Write};

use super::feed::types::FeedItem;

const PUBLISHED_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

pub fn write_report<W: Write>(out: &mut W, items: &[FeedItem]) -> io::Result<()> {
    writeln!(out, "Found {} posts published today:", items.len())?;
    writeln!(out)?;

    for (index, item) in items.iter().enumerate() {
        let published = item
            .published
            .map(|timestamp| timestamp.format(PUBLISHED_FORMAT).to_string())
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(out, "{}. {}", index + 1, item.title)?;
        writeln!(out, "   Published: {published}")?;
        writeln!(out, "   Link: {}", item.link)?;
        writeln!(out)?;
    }
    Ok(())
}
