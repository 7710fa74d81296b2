//! Error types for harness runs.

use restful_objects_client::ApiError;
use thiserror::Error;

/// A field or count that did not match its expected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{check}: expected {expected}, got {actual}")]
pub struct AssertionFailure {
    /// What was being checked, e.g. `item name`
    pub check: String,
    pub expected: String,
    pub actual: String,
}

impl AssertionFailure {
    pub fn new(
        check: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            check: check.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Errors that fail a scenario or prevent the harness from starting.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Transport, status or decode failure from the object API.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A response did not match the expected values.
    #[error("Assertion failed: {0}")]
    Assertion(#[from] AssertionFailure),

    /// A response decoded but lacked a field the scenario needs.
    #[error("Missing field in response: {field}")]
    MissingField { field: String },

    /// Harness configuration could not be loaded or is invalid.
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HarnessError {
    /// Get the assertion failure, if this is one.
    pub fn as_assertion(&self) -> Option<&AssertionFailure> {
        match self {
            Self::Assertion(failure) => Some(failure),
            _ => None,
        }
    }

    /// Whether the request never reached the service.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_transport())
    }

    /// Get the HTTP status of an unexpected API response, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => e.status(),
            _ => None,
        }
    }
}

impl From<::config::ConfigError> for HarnessError {
    fn from(error: ::config::ConfigError) -> Self {
        Self::Configuration {
            message: error.to_string(),
        }
    }
}
