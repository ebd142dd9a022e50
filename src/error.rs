//! Error types for the shift rotation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the scheduler and its configuration layer can
//! report.

use thiserror::Error;

/// The main error type for the shift rotation engine.
///
/// # Example
///
/// ```
/// use shift_rota::error::EngineError;
///
/// let error = EngineError::UnknownGroup {
///     group: "E".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown group: E");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The group identifier is not one of the configured groups.
    #[error("Unknown group: {group}")]
    UnknownGroup {
        /// The identifier that was looked up.
        group: String,
    },

    /// Neither a slot id nor a slot display name matched.
    #[error("Unknown slot: {slot}")]
    UnknownSlot {
        /// The id or display name that was looked up.
        slot: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but breaks a scheduling invariant.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Which invariant was violated.
        message: String,
    },

    /// The reference zone is not a known IANA time zone.
    #[error("Unknown time zone: {zone}")]
    InvalidTimeZone {
        /// The zone name as written in the configuration.
        zone: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        EngineError::InvalidConfig {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
