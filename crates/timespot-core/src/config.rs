use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::TimeFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub clock: ClockConfig,
    pub search: SearchConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub user: UserConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    pub time_format: TimeFormat,
    pub viewport_width: f64,
    pub container_padding: f64,
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub settle_delay_ms: u64,
}

impl DisplayConfig {
    /// ## Summary
    /// Width left for the primary clock once the container padding is removed.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        self.viewport_width - self.container_padding * 2.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    pub tick_ms: u64,
    pub refresh_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub max_results: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserConfig {
    pub id: Option<String>,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// Environment variables use the `TIMESPOT_` prefix and `__` between
    /// sections, e.g. `TIMESPOT_DISPLAY__TIME_FORMAT=12h`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder()?
            .add_source(
                config::Environment::with_prefix("TIMESPOT")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?
            .validated()?)
    }

    /// ## Summary
    /// Settings built from defaults alone.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn defaults() -> Result<Self> {
        Ok(Self::builder()?
            .build()?
            .try_deserialize::<Settings>()?
            .validated()?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive the app.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` for a zero tick or refresh interval,
    /// or when the minimum font size exceeds the maximum.
    pub fn validated(self) -> CoreResult<Self> {
        if self.clock.tick_ms == 0 {
            return Err(CoreError::ConfigError("clock.tick_ms must be positive".into()));
        }
        if self.clock.refresh_secs == 0 {
            return Err(CoreError::ConfigError(
                "clock.refresh_secs must be positive".into(),
            ));
        }
        if self.display.min_font_size > self.display.max_font_size {
            return Err(CoreError::ConfigError(format!(
                "display.min_font_size {} exceeds display.max_font_size {}",
                self.display.min_font_size, self.display.max_font_size
            )));
        }
        Ok(self)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("display.time_format", "24h")?
            .set_default("display.viewport_width", 1024.0)?
            .set_default("display.container_padding", 32.0)?
            .set_default("display.min_font_size", 48.0)?
            .set_default("display.max_font_size", 280.0)?
            .set_default("display.settle_delay_ms", 50)?
            .set_default("clock.tick_ms", 1000)?
            .set_default("clock.refresh_secs", 300)?
            .set_default("search.debounce_ms", 300)?
            .set_default("search.max_results", 20)?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_defaults() {
        let settings = Settings::defaults().expect("defaults deserialize");
        assert_eq!(settings.display.time_format, TimeFormat::Hours24);
        assert!((settings.display.min_font_size - 48.0).abs() < f64::EPSILON);
        assert!((settings.display.max_font_size - 280.0).abs() < f64::EPSILON);
        assert_eq!(settings.clock.tick_ms, 1000);
        assert_eq!(settings.clock.refresh_secs, 300);
        assert_eq!(settings.search.max_results, 20);
        assert!(settings.storage.path.is_none());
        assert!(settings.user.id.is_none());
    }

    #[test_log::test]
    fn test_available_width_subtracts_padding() {
        let settings = Settings::defaults().expect("defaults deserialize");
        assert!((settings.display.available_width() - 960.0).abs() < f64::EPSILON);
    }

    #[test_log::test]
    fn test_zero_intervals_are_rejected() {
        let mut settings = Settings::defaults().expect("defaults deserialize");
        settings.clock.tick_ms = 0;
        assert!(matches!(settings.validated(), Err(CoreError::ConfigError(_))));

        let mut settings = Settings::defaults().expect("defaults deserialize");
        settings.clock.refresh_secs = 0;
        assert!(matches!(settings.validated(), Err(CoreError::ConfigError(_))));
    }

    #[test_log::test]
    fn test_inverted_font_bounds_are_rejected() {
        let mut settings = Settings::defaults().expect("defaults deserialize");
        settings.display.min_font_size = 300.0;
        assert!(matches!(settings.validated(), Err(CoreError::ConfigError(_))));
    }
}
