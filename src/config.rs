use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::application::driver::DriverOptions;
use crate::domain::config_types::{
    GeneratorLifecycle, IterationCount, PauseMillis, SeedCount, UrlCount,
};

/// Prefix of environment variables overriding settings, e.g.
/// `SYNTHETIC_EVENTS__DRIVER__ITERATIONS=10`
pub const ENV_PREFIX: &str = "SYNTHETIC_EVENTS";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub driver: DriverSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorSettings {
    pub seed_count: SeedCount,
    pub url_count: UrlCount,
    pub lifecycle: GeneratorLifecycle,
    /// Seed for the random source; entropy-seeded when unset
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DriverSettings {
    pub iterations: IterationCount,
    pub pause_ms: PauseMillis,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Self::defaults()?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        Self::from_config(config)
    }

    /// Builder preloaded with the documented defaults
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("generator.seed_count", 100)?
            .set_default("generator.url_count", 3)?
            .set_default("generator.lifecycle", "reconstruct")?
            .set_default("driver.iterations", 1000)?
            .set_default("driver.pause_ms", 100)?
            .set_default("logging.level", "info")
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            iterations: self.driver.iterations,
            pause: self.driver.pause_ms.as_duration(),
            lifecycle: self.generator.lifecycle,
            url_count: self.generator.url_count,
        }
    }
}
