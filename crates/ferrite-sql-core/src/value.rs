//! SQL column types and normalized column values.

use chrono::{NaiveDate, NaiveDateTime};

/// The declared SQL type of a result column, as reported by the driver's
/// result metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// BOOLEAN / BIT.
    Boolean,
    /// SMALLINT.
    SmallInt,
    /// INTEGER.
    Integer,
    /// BIGINT.
    BigInt,
    /// NUMERIC / DECIMAL.
    Decimal,
    /// REAL / DOUBLE PRECISION.
    Double,
    /// CHAR.
    Char,
    /// VARCHAR / TEXT.
    Varchar,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// TIMESTAMP / DATETIME.
    Timestamp,
    /// BINARY / VARBINARY / BLOB.
    Binary,
    /// Any type this layer has no dedicated handling for.
    Other,
}

/// A normalized column value handed back to the result-mapping layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Date-only value.
    Date(NaiveDate),
    /// Date-and-time value.
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    /// Returns `true` for SQL NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
