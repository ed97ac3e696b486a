//! Error types and handling for the uvmap service

use thiserror::Error;

/// Main error type for the uvmap service
#[derive(Error, Debug)]
pub enum UvMapError {
    /// Network or I/O failure while talking to a provider (including timeouts)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// Geocoding returned no match for the query
    #[error("Location not found: {query}")]
    NotFound { query: String },

    /// Provider payload did not have the expected shape
    #[error("Unexpected provider data: {message}")]
    DataShape { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl UvMapError {
    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given query
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new data shape error
    pub fn data_shape<S: Into<String>>(message: S) -> Self {
        Self::DataShape {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            UvMapError::Transport { .. } => {
                "Unable to reach the weather service. Please try again in a moment.".to_string()
            }
            UvMapError::NotFound { query } => {
                format!("No location found for '{query}'.")
            }
            UvMapError::DataShape { .. } => {
                "The weather service returned data we could not read.".to_string()
            }
            UvMapError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            UvMapError::Config { .. } => {
                "Configuration error. Please check your uvmap.toml and UVMAP_ variables."
                    .to_string()
            }
            UvMapError::Io { .. } => "File operation failed.".to_string(),
        }
    }
}

impl From<reqwest::Error> for UvMapError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UvMapError::transport(format!("request timed out: {err}"))
        } else if err.is_decode() {
            UvMapError::data_shape(err.to_string())
        } else {
            UvMapError::transport(err.to_string())
        }
    }
}
