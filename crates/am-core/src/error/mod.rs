use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid theme: {value} {location}")]
    InvalidTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid height: {value} {location}")]
    InvalidHeight {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error at the caller's location
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// User-facing message without the source location suffix
    pub fn message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidTheme { value, .. } => {
                format!("Theme must be 'light' or 'dark', got '{value}'.")
            }
            CoreError::InvalidHeight { value, .. } => {
                format!("Height must be feet and inches (e.g. 5'9\"), got '{value}'.")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
