use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can come back from the remote authority.
///
/// Local validation never produces one of these; by the time a
/// `RemoteError` exists, a network call was attempted.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Validation rejected: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not authorized: {message} {location}")]
    Authorization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response ({status}): {message} {location}")]
    Unexpected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl RemoteError {
    /// Map an HTTP status plus the server's detail message to a variant
    #[track_caller]
    pub fn from_status(status: u16, message: String) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match status {
            400 => RemoteError::Validation { message, location },
            401 | 403 => RemoteError::Authorization { message, location },
            404 => RemoteError::NotFound { message, location },
            409 => RemoteError::Conflict { message, location },
            _ => RemoteError::Unexpected {
                status,
                message,
                location,
            },
        }
    }

    /// Create a network error without an underlying transport error
    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        RemoteError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    /// Convert a body-decode failure with context
    #[track_caller]
    pub fn decode(source: reqwest::Error) -> Self {
        RemoteError::Decode {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, RemoteError::Authorization { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::NotFound { .. })
    }

    /// User-facing message without the source location suffix
    pub fn message(&self) -> &str {
        match self {
            RemoteError::Validation { message, .. }
            | RemoteError::Authorization { message, .. }
            | RemoteError::Conflict { message, .. }
            | RemoteError::NotFound { message, .. }
            | RemoteError::Network { message, .. }
            | RemoteError::Decode { message, .. }
            | RemoteError::Unexpected { message, .. } => message,
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }
}

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;
