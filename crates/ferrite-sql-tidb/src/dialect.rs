//! TiDB dialect implementation.

use ferrite_sql_core::{Dialect, PaginationStyle, Result, SqlFailure};

/// SQLSTATE reported for a unique-constraint violation.
const UNIQUE_VIOLATION_SQL_STATE: &str = "1062";

/// SQLSTATE reported when a query is canceled for exceeding its time
/// budget.
const QUERY_CANCELED_SQL_STATE: &str = "3024";

/// TiDB dialect.
///
/// Every capability flag is on: the backend has sequence objects (fetched
/// with `nextval`), identity columns that also work for batch insert, and
/// native offset pagination via the trailing `limit` clause.
#[derive(Debug, Default, Clone, Copy)]
pub struct TiDbDialect;

impl TiDbDialect {
    /// Creates the TiDB dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for TiDbDialect {
    fn name(&self) -> &'static str {
        "tidb"
    }

    fn pagination_style(&self) -> PaginationStyle {
        PaginationStyle::TrailingLimit
    }

    fn supports_offset(&self) -> bool {
        true
    }

    fn supports_sequence(&self) -> bool {
        true
    }

    fn supports_identity(&self) -> bool {
        true
    }

    fn is_duplicate_violation(&self, failure: &SqlFailure) -> bool {
        failure.sql_state() == Some(UNIQUE_VIOLATION_SQL_STATE)
    }

    fn is_transaction_timeout(&self, failure: &SqlFailure) -> bool {
        failure.sql_state() == Some(QUERY_CANCELED_SQL_STATE)
    }

    fn build_sequence_generator_sql(&self, sequence_name: &str) -> Result<String> {
        Ok(format!("select nextval({sequence_name})"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ferrite_sql_core::SelectOption;

    #[test]
    fn test_capability_flags() {
        let dialect = TiDbDialect::new();
        assert!(dialect.supports_offset());
        assert!(dialect.supports_sequence());
        assert!(dialect.supports_identity());
        assert!(dialect.supports_identity_with_batch_insert());
    }

    #[test]
    fn test_duplicate_matches_sql_state_exactly() {
        let dialect = TiDbDialect::new();
        assert!(dialect.is_duplicate_violation(&SqlFailure::from_sql_state("1062")));
        assert!(!dialect.is_duplicate_violation(&SqlFailure::from_sql_state("10629")));
        // The vendor code field is not the signal for this backend.
        assert!(!dialect.is_duplicate_violation(&SqlFailure::from_vendor_code(1062)));
    }

    #[test]
    fn test_timeout_matches_sql_state_exactly() {
        let dialect = TiDbDialect::new();
        assert!(dialect.is_transaction_timeout(&SqlFailure::from_sql_state("3024")));
        assert!(!dialect.is_transaction_timeout(&SqlFailure::from_sql_state("30249")));
        assert!(!dialect.is_transaction_timeout(&SqlFailure::from_vendor_code(3024)));
    }

    #[test]
    fn test_pagination_with_offset_and_limit() {
        let dialect = TiDbDialect::new();
        assert_eq!(
            dialect.convert_pagination_sql("select * from dual", &SelectOption::new(5, 10)),
            "select * from dual limit 4, 10"
        );
    }

    #[test]
    fn test_pagination_offset_only_uses_sentinel_row_count() {
        let dialect = TiDbDialect::new();
        let sql = "SELECT HOGE, FUGA FROM HOGE_TABLE INNER JOIN FUGA_TABLE \
                   ON HOGE_TABLE.ID = FUGA_TABLE.HOGE_ID \
                   ORDER BY HOGE_TABLE.ID, HOGE_TABLE.NAME";
        assert_eq!(
            dialect.convert_pagination_sql(sql, &SelectOption::new(50, 0)),
            format!("{sql} limit 49, 2147483647")
        );
    }

    #[test]
    fn test_pagination_limit_only() {
        let dialect = TiDbDialect::new();
        assert_eq!(
            dialect.convert_pagination_sql("select * from book", &SelectOption::new(0, 25)),
            "select * from book limit 25"
        );
    }

    #[test]
    fn test_pagination_without_bounds_is_noop() {
        let dialect = TiDbDialect::new();
        assert_eq!(
            dialect.convert_pagination_sql("select * from book", &SelectOption::new(1, 0)),
            "select * from book"
        );
    }

    #[test]
    fn test_count_rewrite() {
        assert_eq!(
            TiDbDialect::new().convert_count_sql("SELECT * FROM DUAL"),
            "SELECT COUNT(*) COUNT_ FROM (SELECT * FROM DUAL) SUB_"
        );
    }

    #[test]
    fn test_sequence_generator_sql() {
        assert_eq!(
            TiDbDialect::new()
                .build_sequence_generator_sql("sequence_name")
                .unwrap(),
            "select nextval(sequence_name)"
        );
    }

    #[test]
    fn test_ping_sql() {
        assert_eq!(TiDbDialect::new().ping_sql(), "select 1");
    }
}
