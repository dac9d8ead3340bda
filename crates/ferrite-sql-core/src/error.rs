//! Error types and the driver-reported failure signal.

use thiserror::Error;

/// Errors surfaced by the dialect layer.
#[derive(Debug, Error)]
pub enum DialectError {
    /// A sequence-value query was requested from a dialect whose backend
    /// has no sequence objects. Callers are expected to consult
    /// `supports_sequence()` first, so hitting this is a programming error,
    /// not a runtime condition.
    #[error("sequence generation is not supported by the {0} dialect")]
    SequenceNotSupported(&'static str),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;

/// The error indicator a database driver attached to a failed statement.
///
/// Drivers report two fields: a vendor-specific numeric error code and a
/// SQLSTATE-like string. Which of the two identifies a failure class is
/// backend-defined, so both are carried and each dialect reads only the
/// field its backend documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFailure {
    vendor_code: i32,
    sql_state: Option<String>,
}

impl SqlFailure {
    /// Creates a signal carrying both fields.
    pub fn new(vendor_code: i32, sql_state: impl Into<String>) -> Self {
        Self {
            vendor_code,
            sql_state: Some(sql_state.into()),
        }
    }

    /// Creates a signal from a vendor error code alone.
    #[must_use]
    pub const fn from_vendor_code(vendor_code: i32) -> Self {
        Self {
            vendor_code,
            sql_state: None,
        }
    }

    /// Creates a signal from a SQLSTATE string alone.
    pub fn from_sql_state(sql_state: impl Into<String>) -> Self {
        Self {
            vendor_code: 0,
            sql_state: Some(sql_state.into()),
        }
    }

    /// The vendor-specific numeric error code; `0` when the driver did not
    /// supply one.
    #[must_use]
    pub const fn vendor_code(&self) -> i32 {
        self.vendor_code
    }

    /// The SQLSTATE-like string, if the driver supplied one.
    #[must_use]
    pub fn sql_state(&self) -> Option<&str> {
        self.sql_state.as_deref()
    }
}
