use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Which part of the configuration a `ConfigError::Invalid` is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Config,
    Logging,
    Validation,
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigSection::Config => "config",
            ConfigSection::Logging => "logging",
            ConfigSection::Validation => "validation",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {section} settings: {message} {location}")]
    Invalid {
        section: ConfigSection,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    fn invalid(section: ConfigSection, message: String) -> Self {
        Self::Invalid {
            section,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Config, message.into())
    }

    #[track_caller]
    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Logging, message.into())
    }

    /// Bad `[validation]` limits
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::invalid(ConfigSection::Validation, message.into())
    }

    /// The section an `Invalid` error refers to
    pub fn section(&self) -> Option<ConfigSection> {
        match self {
            Self::Invalid { section, .. } => Some(*section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
