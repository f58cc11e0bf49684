//! # Error Types
//!
//! Structured error types for section_core. The property engines themselves
//! never fail: malformed geometry degrades to zeroed results. Errors only come
//! from the edges of the crate - shape template parameters, solver settings,
//! optional geometry validation and section file I/O.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{CalcError, CalcResult};
//!
//! fn validate_wall(wall_in: f64) -> CalcResult<()> {
//!     if wall_in <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "wall".to_string(),
//!             value: wall_in.to_string(),
//!             reason: "Wall thickness must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section property operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent dimensions, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A ring of a cross-section is not usable geometry
    #[error("Invalid geometry in {ring}: {reason}")]
    InvalidGeometry { ring: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(ring: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            ring: ring.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("radius", "-2", "Radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_geometry("hole 1", "too few vertices").error_code(), "INVALID_GEOMETRY");
        assert_eq!(CalcError::file_error("open", "a.json", "missing").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_geometry("outer boundary", "only 2 vertices");
        assert_eq!(error.to_string(), "Invalid geometry in outer boundary: only 2 vertices");
    }
}
