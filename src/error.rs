//! # Error Handling
//!
//! This module defines the centralized error type for `dotplan`. It uses the
//! `thiserror` library to derive a single `Error` enum covering plan parsing,
//! custom actions, and filesystem failures during `apply`.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Failures raised while executing a batch are
//!   wrapped in [`Error::Operation`], which records the position and the
//!   rendered form of the operation that failed alongside the underlying
//!   cause.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.

use thiserror::Error;

/// Main error type for dotplan operations
#[derive(Error, Debug)]
pub enum Error {
    /// A plan file could not be interpreted.
    ///
    /// Carries an optional hint about how to fix the plan.
    #[error("Plan parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    PlanParse {
        message: String,
        /// Optional hint for how to fix the plan
        hint: Option<String>,
    },

    /// A caller-supplied custom action reported a failure.
    #[error("Custom action error: {action} - {message}")]
    Custom { action: String, message: String },

    /// An operation of a batch failed while the batch was being applied.
    ///
    /// `index` is the zero-based position of the operation in the batch and
    /// `operation` its rendered form. Operations before `index` have already
    /// taken effect; the ones after it were not attempted.
    #[error("Operation #{index} failed: {operation}: {source}")]
    Operation {
        index: usize,
        operation: String,
        #[source]
        source: Box<Error>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
