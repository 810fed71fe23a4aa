use anyhow::Context;
use today_feed_lib::ReaderConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ReaderConfig::default();
    tracing::debug!(feed_url = %config.feed_url, timeout_secs = config.timeout_secs, "starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    today_feed_lib::run(&config, &mut out)
        .await
        .context("error reading RSS feed")?;
    Ok(())
}
