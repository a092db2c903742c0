//! Site configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shopfront_commerce::Currency;
use shopfront_observability::LogLevel;

use crate::error::InteractError;

/// Image shown on every cart row.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1586201375761-83865001e31c?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&q=80";

/// Configuration for the storefront controller.
///
/// Every timing is in milliseconds. Missing fields take their defaults, so a
/// config file only needs to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Key the cart snapshot is persisted under.
    pub storage_key: String,
    /// Currency prices are read and displayed in.
    pub currency: Currency,
    /// How long a notification stays up.
    pub toast_duration_ms: u64,
    /// Delay before a new notification gets its active state.
    pub toast_enter_delay_ms: u64,
    /// Exit transition before a notification is removed.
    pub toast_exit_ms: u64,
    /// Visible ratio at which a reveal target is revealed.
    pub reveal_threshold: f64,
    /// Delay before a progress fill is restored to its width.
    pub progress_restore_delay_ms: u64,
    /// Number of steps a counter takes to reach its target.
    pub counter_steps: u32,
    /// Counter tick interval.
    pub counter_interval_ms: u64,
    /// Thousands separator for counter values.
    pub thousands_separator: char,
    /// Fade-out before a filtered card is hidden.
    pub filter_fade_ms: u64,
    /// Delay before a shown card fades in.
    pub filter_fade_in_delay_ms: u64,
    /// Simulated checkout duration.
    pub checkout_delay_ms: u64,
    /// How long an add-to-cart button shows its "Added" state.
    pub added_feedback_ms: u64,
    /// Image used for cart rows.
    pub placeholder_image: String,
    /// Minimum log level.
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: "cart".to_string(),
            currency: Currency::USD,
            toast_duration_ms: 4000,
            toast_enter_delay_ms: 10,
            toast_exit_ms: 300,
            reveal_threshold: 0.1,
            progress_restore_delay_ms: 100,
            counter_steps: 50,
            counter_interval_ms: 30,
            thousands_separator: ',',
            filter_fade_ms: 300,
            filter_fade_in_delay_ms: 10,
            checkout_delay_ms: 1500,
            added_feedback_ms: 2000,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            log_level: LogLevel::Info,
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, InteractError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config and validate it.
    pub fn from_toml(text: &str) -> Result<Self, InteractError> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that values are in range.
    pub fn validate(&self) -> Result<(), InteractError> {
        if self.storage_key.trim().is_empty() {
            return Err(InteractError::Config("storage_key must not be empty".into()));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(InteractError::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.counter_steps == 0 {
            return Err(InteractError::Config("counter_steps must be positive".into()));
        }
        if self.counter_interval_ms == 0 {
            return Err(InteractError::Config(
                "counter_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the notification lifetime.
    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration_ms = duration.as_millis() as u64;
        self
    }

    /// Set the reveal threshold.
    pub fn with_reveal_threshold(mut self, threshold: f64) -> Self {
        self.reveal_threshold = threshold;
        self
    }

    /// Set the counter step count and tick interval.
    pub fn with_counter(mut self, steps: u32, interval: Duration) -> Self {
        self.counter_steps = steps;
        self.counter_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the minimum log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn toast_enter_delay(&self) -> Duration {
        Duration::from_millis(self.toast_enter_delay_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn progress_restore_delay(&self) -> Duration {
        Duration::from_millis(self.progress_restore_delay_ms)
    }

    pub fn counter_interval(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms)
    }

    pub fn filter_fade(&self) -> Duration {
        Duration::from_millis(self.filter_fade_ms)
    }

    pub fn filter_fade_in_delay(&self) -> Duration {
        Duration::from_millis(self.filter_fade_in_delay_ms)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn added_feedback(&self) -> Duration {
        Duration::from_millis(self.added_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.toast_duration(), Duration::from_millis(4000));
        assert_eq!(config.counter_steps, 50);
        assert_eq!(config.counter_interval(), Duration::from_millis(30));
        assert_eq!(config.filter_fade(), Duration::from_millis(300));
        assert!((config.reveal_threshold - 0.1).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = SiteConfig::from_json(r#"{"storage_key":"shop-cart","log_level":"debug"}"#)
            .unwrap();
        assert_eq!(config.storage_key, "shop-cart");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.checkout_delay_ms, 1500);
    }

    #[test]
    fn test_partial_toml() {
        let config = SiteConfig::from_toml(
            r#"
currency = "EUR"
toast_duration_ms = 2500
"#,
        )
        .unwrap();
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.toast_duration(), Duration::from_millis(2500));
    }

    #[test]
    fn test_validation() {
        assert!(SiteConfig::default()
            .with_reveal_threshold(0.0)
            .validate()
            .is_err());
        assert!(SiteConfig::default()
            .with_counter(0, Duration::from_millis(30))
            .validate()
            .is_err());
        assert!(SiteConfig::default().with_storage_key(" ").validate().is_err());
        assert!(matches!(
            SiteConfig::from_json("{\"counter_steps\": -1}"),
            Err(InteractError::Config(_))
        ));
    }
}
