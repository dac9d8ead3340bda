//! MySQL dialect implementation.

use chrono::NaiveTime;

use ferrite_sql_core::{ColumnConvertor, Dialect, SqlFailure, SqlType, SqlValue};

/// Vendor error code for a unique-constraint violation
/// (ER_DUP_ENTRY, SQLSTATE 23000).
const DUP_ENTRY_ERROR_CODE: i32 = 1062;

/// Vendor error code raised when a query exceeds its time budget
/// (ER_QUERY_TIMEOUT, SQLSTATE HY000).
const QUERY_TIMEOUT_ERROR_CODE: i32 = 3024;

/// MySQL dialect.
///
/// Classifies failures by vendor error code and keeps pagination on the
/// row-number subquery family. Offset pagination is supported by the
/// backend; sequences and identity key generation are not used.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDialect;

impl MySqlDialect {
    /// Creates the MySQL dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn supports_offset(&self) -> bool {
        true
    }

    fn is_duplicate_violation(&self, failure: &SqlFailure) -> bool {
        failure.vendor_code() == DUP_ENTRY_ERROR_CODE
    }

    fn is_transaction_timeout(&self, failure: &SqlFailure) -> bool {
        failure.vendor_code() == QUERY_TIMEOUT_ERROR_CODE
    }

    fn column_convertor(&self) -> &dyn ColumnConvertor {
        &MySqlColumnConvertor
    }
}

/// MySQL column value conversion.
///
/// The driver hands date-typed columns back as date-only values; they are
/// promoted to the timestamp representation (midnight time component) so
/// callers see one temporal shape. Everything else passes through.
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlColumnConvertor;

impl ColumnConvertor for MySqlColumnConvertor {
    fn convert(&self, declared: SqlType, value: SqlValue) -> SqlValue {
        match (declared, value) {
            (SqlType::Date | SqlType::Timestamp, SqlValue::Date(date)) => {
                SqlValue::Timestamp(date.and_time(NaiveTime::MIN))
            }
            (_, value) => value,
        }
    }
}
