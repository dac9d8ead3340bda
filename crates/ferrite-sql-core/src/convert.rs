//! Per-column value conversion.
//!
//! Consulted by the result-mapping layer once per column, per row, with the
//! column's declared type and the raw value the driver produced. Conversion
//! is where a dialect irons out backend quirks in how values come back —
//! the canonical case being date-typed columns normalized to the timestamp
//! representation so callers never special-case date-only columns.

use crate::value::{SqlType, SqlValue};

/// Converts one raw result-column value into its normalized form.
///
/// Implementations must be pure and deterministic: same declared type and
/// raw value in, same normalized value out, on every call.
pub trait ColumnConvertor: Send + Sync {
    /// Whether a column of the given declared type is convertible.
    ///
    /// Every current backend converts every column, but the hook stays in
    /// the contract for backends that cannot.
    fn is_convertible(&self, declared: SqlType) -> bool {
        let _ = declared;
        true
    }

    /// Produces the normalized value for a column of the given declared
    /// type.
    fn convert(&self, declared: SqlType, value: SqlValue) -> SqlValue;
}

/// The identity conversion: every value passes through as the backend's
/// native representation for its SQL type.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughConvertor;

impl ColumnConvertor for PassthroughConvertor {
    fn convert(&self, _declared: SqlType, value: SqlValue) -> SqlValue {
        value
    }
}
