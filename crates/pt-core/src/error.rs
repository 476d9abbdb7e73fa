use crate::DragPhase;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid project status: {value} {location}")]
    InvalidProjectStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid drag transition: {from} -> {to} {location}")]
    InvalidDragTransition {
        from: DragPhase,
        to: DragPhase,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a named field
    #[track_caller]
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        CoreError::Validation {
            field: field.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an error for a rejected drag phase change
    #[track_caller]
    pub fn drag_transition(from: DragPhase, to: DragPhase) -> Self {
        CoreError::InvalidDragTransition {
            from,
            to,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
