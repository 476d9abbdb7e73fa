use pt_config::ConfigError;
use pt_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Template not found: {template_id} {location}")]
    TemplateNotFound {
        template_id: String,
        location: ErrorLocation,
    },

    #[error("Element not found: {element_id} {location}")]
    ElementNotFound {
        element_id: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("{source} {location}")]
    Core {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ViewError {
    #[track_caller]
    pub fn template_not_found<S: Into<String>>(template_id: S) -> Self {
        Self::TemplateNotFound {
            template_id: template_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn element_not_found<S: Into<String>>(element_id: S) -> Self {
        Self::ElementNotFound {
            element_id: element_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ViewError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ViewError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
