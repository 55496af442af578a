use crate::identity::error::IdentityError;

use std::panic::Location;

use am_client::RemoteError;
use am_core::CoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Remote call failed: {source}")]
    Remote {
        #[from]
        source: RemoteError,
    },

    #[error("Invalid input: {source}")]
    Invalid {
        #[from]
        source: CoreError,
    },

    #[error("Identity storage failed: {source}")]
    Identity {
        #[from]
        source: IdentityError,
    },

    #[error("A save is already in flight for {group} {location}")]
    SubmitInFlight {
        group: &'static str,
        location: ErrorLocation,
    },

    #[error("{group} is not being edited {location}")]
    NotEditing {
        group: &'static str,
        location: ErrorLocation,
    },

    #[error("No authenticated user {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Friend removal requires confirmation first {location}")]
    RemovalNotConfirmed { location: ErrorLocation },

    #[error("Logger setup failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Creates SubmitInFlight error at caller location.
    #[track_caller]
    pub fn submit_in_flight(group: &'static str) -> Self {
        Self::SubmitInFlight {
            group,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotEditing error at caller location.
    #[track_caller]
    pub fn not_editing(group: &'static str) -> Self {
        Self::NotEditing {
            group,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotAuthenticated error at caller location.
    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates RemovalNotConfirmed error at caller location.
    #[track_caller]
    pub fn removal_not_confirmed() -> Self {
        Self::RemovalNotConfirmed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Logger error at caller location.
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether this error came from local validation (and therefore never
    /// produced a network call)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Invalid { .. })
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Remote { source } if source.is_authorization())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { source } if source.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
