//! Error types for the signal-features engine.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the signal-features engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Input error (empty, malformed, or inconsistent bar data).
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration error (invalid parameter set).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Computation error inside a single indicator.
    #[error("Computation error in {indicator}: {message}")]
    Computation {
        /// Name of the indicator that failed.
        indicator: String,
        /// What went wrong.
        message: String,
    },
}

impl Error {
    /// Create an input error.
    pub fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a computation error for a named indicator.
    pub fn computation(indicator: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Computation {
            indicator: indicator.into(),
            message: message.into(),
        }
    }
}
