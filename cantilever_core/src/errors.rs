//! # Errors
//!
//! One error enum for the whole crate. Analysis failures are always caller
//! configuration problems, so [`CalcError::InvalidInput`] names the offending
//! field and value instead of carrying a bare message. The remaining variants
//! belong to [`file_io`](crate::file_io).
//!
//! Errors serialize as tagged JSON (`{"type": ..., "details": {...}}`) so a
//! front end can show them without parsing display strings.
//!
//! ```rust
//! use cantilever_core::errors::{CalcError, CalcResult};
//!
//! fn check_span(length_m: f64) -> CalcResult<f64> {
//!     if length_m > 0.0 {
//!         Ok(length_m)
//!     } else {
//!         Err(CalcError::invalid_input("length_m", length_m.to_string(), "span must be positive"))
//!     }
//! }
//!
//! let err = check_span(-1.0).unwrap_err();
//! assert_eq!(err.error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CalcResult<T> = Result<T, CalcError>;

#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A parameter is out of its domain (non-positive dimension or modulus,
    /// load off the beam, too few samples)
    #[error("invalid {field} = {value}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{operation} failed for '{path}': {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Someone else holds the file's lock
    #[error("'{path}' is locked by {locked_by} (since {locked_at})")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    #[error("JSON error: {reason}")]
    SerializationError { reason: String },

    /// The file was written by an incompatible schema
    #[error("file schema {file_version} is not readable by schema {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let (field, value, reason) = (field.into(), value.into(), reason.into());
        CalcError::InvalidInput { field, value, reason }
    }

    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let (operation, path, reason) = (operation.into(), path.into(), reason.into());
        CalcError::FileError { operation, path, reason }
    }

    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        let (path, locked_by, locked_at) = (path.into(), locked_by.into(), locked_at.into());
        CalcError::FileLocked { path, locked_by, locked_at }
    }

    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError { reason: reason.into() }
    }

    /// Whether retrying later can succeed.
    ///
    /// Only a held lock qualifies; the evaluators are deterministic.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        use CalcError::*;
        match self {
            InvalidInput { .. } => "INVALID_INPUT",
            FileError { .. } => "FILE_ERROR",
            FileLocked { .. } => "FILE_LOCKED",
            SerializationError { .. } => "SERIALIZATION_ERROR",
            VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Require a finite, strictly positive value.
pub(crate) fn require_positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), reason))
    }
}
