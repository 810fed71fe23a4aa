pub const DEFAULT_FEED_URL: &str = "https://github.blog/changelog/label/copilot/feed/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_USER_AGENT: &str = concat!("today-feed/", env!("CARGO_PKG_VERSION"));

/// Reader settings. The binary always runs with [`ReaderConfig::default`];
/// there is no environment or command-line override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub feed_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_copilot_changelog() {
        let config = ReaderConfig::default();

        assert_eq!(config.feed_url, "https://github.blog/changelog/label/copilot/feed/");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent.starts_with("today-feed/"));
    }

    #[test]
    fn default_ignores_process_environment() {
        std::env::set_var("TODAY_FEED_URL", "https://example.com/x.xml");

        let config = ReaderConfig::default();

        std::env::remove_var("TODAY_FEED_URL");
        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
    }
}
