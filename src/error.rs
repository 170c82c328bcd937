//! Error types and handling for the `flysafe` library

use thiserror::Error;

/// Main error type for the `flysafe` library
#[derive(Error, Debug)]
pub enum FlysafeError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Boundary-service communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Airport registry errors. The registry is compiled in, so hitting this
    /// variant means a deployment/programming error, never a user mistake.
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// Coordinate projection errors
    #[error("Projection error: {message}")]
    Transform { message: String },
}

impl FlysafeError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a new projection error
    pub fn transform<S: Into<String>>(message: S) -> Self {
        Self::Transform {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            FlysafeError::Config { .. } => {
                "Configuration error. Please check the safety-check settings.".to_string()
            }
            FlysafeError::Api { .. } => {
                "Unable to reach the nature reserve service. Please check your internet connection."
                    .to_string()
            }
            FlysafeError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            FlysafeError::Registry { .. } => {
                "The airport registry is unavailable. This is a deployment error.".to_string()
            }
            FlysafeError::Transform { .. } => {
                "Coordinate projection failed for the given point.".to_string()
            }
        }
    }
}
