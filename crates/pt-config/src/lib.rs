mod config;
mod error;
mod log_level;
mod logging_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult, ConfigSection};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "PT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".pt";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
