//! Start-up: configuration, logging and the storefront controller.

use anyhow::{Context, Result};
use shopfront_cache::KeyValueStore;
use shopfront_interact::{SiteConfig, Storefront};
use shopfront_observability::{LogFormat, LogSink, SessionId, StructuredLogger};

/// Settings compiled into the bundle.
const SITE_CONFIG: &str = include_str!("../site.toml");

/// Parse the bundled site settings.
pub fn site_config() -> Result<SiteConfig> {
    SiteConfig::from_toml(SITE_CONFIG).context("invalid site.toml")
}

/// Logger for one page view.
pub fn logger(config: &SiteConfig, page: &str, sink: LogSink) -> StructuredLogger {
    StructuredLogger::new(SessionId::generate())
        .with_page(page)
        .with_min_level(config.log_level)
        .with_format(LogFormat::Human)
        .with_sink(sink)
}

/// Build the storefront for `page` over `store`.
pub fn storefront<S: KeyValueStore>(page: &str, store: S, sink: LogSink) -> Result<Storefront<S>> {
    let config = site_config()?;
    let logger = logger(&config, page, sink);
    logger
        .info_builder("storefront starting")
        .field("storage_key", config.storage_key.clone())
        .emit();
    Storefront::load(config, store, logger).context("failed to start storefront")
}
