use crate::client::models::ConflictField;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during identity service calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// Empty identifier argument. Fails fast, before any network call.
    #[error("user identifier cannot be an empty string")]
    InvalidIdentifier,

    /// A supplied value breaks a local invariant (e.g. an empty field in a
    /// full-replacement update). Also pre-network.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The service found no user matching the identifier. The message is the
    /// service's own, surfaced verbatim.
    #[error("{message}")]
    NotFound { message: String },

    /// The update collided with an existing username and/or email.
    #[error("{message} (conflicting fields: {})", field_names(.fields))]
    Conflict {
        message: String,
        fields: Vec<ConflictField>,
    },

    /// The session is not allowed to modify the target user.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("API error: {message} (code: {code}) {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

fn field_names(fields: &[ConflictField]) -> String {
    if fields.is_empty() {
        return "unspecified".to_string();
    }
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ClientError {
    /// Create an invalid-input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidInput {
            message: message.into(),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
