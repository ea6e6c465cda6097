//! Error types for the income tax engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the schedule loader and the simulator
//! facade can report.

use thiserror::Error;

/// The main error type for the income tax engine.
///
/// # Example
///
/// ```
/// use impot_engine::error::EngineError;
///
/// let error = EngineError::InvalidHousehold {
///     reason: "marital status is not set".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid household: marital status is not set");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The household violates one of the declaration invariants.
    #[error("Invalid household: {reason}")]
    InvalidHousehold {
        /// A description of the violated invariant.
        reason: String,
    },

    /// An accessor was used before any successful computation.
    #[error("No computation result available")]
    NoResultAvailable,

    /// An unexpected failure inside the computation pipeline.
    #[error("Computation error: {message}")]
    ComputationError {
        /// A description of the failed operation.
        message: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schedule file or directory was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Schedule file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A schedule was parsed but its parameters are inconsistent.
    #[error("Invalid schedule '{name}': {message}")]
    InvalidSchedule {
        /// The schedule name.
        name: String,
        /// A description of the defect.
        message: String,
    },

    /// No schedule is registered for the requested year.
    #[error("No fiscal schedule found for year {year}")]
    ScheduleNotFound {
        /// The requested year.
        year: i32,
    },
}

impl EngineError {
    pub(crate) fn invalid_household(reason: impl Into<String>) -> Self {
        Self::InvalidHousehold {
            reason: reason.into(),
        }
    }

    pub(crate) fn computation(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ComputationError {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
