//! The per-backend dialect contract.
//!
//! Backends differ in pagination grammar, error signaling, and a handful of
//! capabilities. This module provides the strategy trait every backend
//! dialect implements; shared behavior lives in the default methods, so a
//! concrete dialect overrides only what its backend does differently.

mod default;

pub use default::DefaultDialect;

use tracing::trace;

use crate::convert::{ColumnConvertor, PassthroughConvertor};
use crate::error::{DialectError, Result, SqlFailure};
use crate::rewrite::{self, PaginationStyle};
use crate::select_option::SelectOption;

/// Strategy trait for backend-specific SQL behavior.
///
/// A dialect is an immutable configuration object: capability flags,
/// classifier signal values, and a pagination syntax family, fixed at
/// construction. Every operation is a pure function of its inputs and that
/// configuration, so one instance per backend can be shared freely across
/// threads for the process lifetime.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the pagination syntax family the backend understands.
    fn pagination_style(&self) -> PaginationStyle {
        PaginationStyle::RowNumberSubquery
    }

    /// Returns whether the backend supports offset pagination natively.
    fn supports_offset(&self) -> bool {
        false
    }

    /// Returns whether the backend has sequence objects.
    fn supports_sequence(&self) -> bool {
        false
    }

    /// Returns whether the backend has identity (auto-increment) columns.
    fn supports_identity(&self) -> bool {
        false
    }

    /// Returns whether identity columns produce generated keys on batch
    /// insert. Some backends support identity columns but cannot return
    /// keys for batched statements, hence the separate flag.
    fn supports_identity_with_batch_insert(&self) -> bool {
        self.supports_identity()
    }

    /// Returns whether the failure is a uniqueness-constraint violation.
    ///
    /// Exact-match only against the dialect's configured signal value; a
    /// failure matching nothing stays unclassified and must be propagated
    /// unchanged by the caller.
    fn is_duplicate_violation(&self, failure: &SqlFailure) -> bool {
        let _ = failure;
        false
    }

    /// Returns whether the failure is a statement or transaction timeout.
    ///
    /// Same exact-match contract as
    /// [`is_duplicate_violation`](Self::is_duplicate_violation).
    fn is_transaction_timeout(&self, failure: &SqlFailure) -> bool {
        let _ = failure;
        false
    }

    /// Rewrites `sql` so it returns only the requested window.
    fn convert_pagination_sql(&self, sql: &str, option: &SelectOption) -> String {
        let rewritten = self.pagination_style().rewrite(sql, option);
        trace!(
            dialect = self.name(),
            offset = option.offset(),
            limit = option.limit(),
            "rewrote pagination query"
        );
        rewritten
    }

    /// Rewrites `sql` so it returns a single row holding the row count of
    /// the original query.
    fn convert_count_sql(&self, sql: &str) -> String {
        let rewritten = rewrite::wrap_count(sql);
        trace!(dialect = self.name(), "rewrote count query");
        rewritten
    }

    /// Builds the query that fetches the next value of the named sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::SequenceNotSupported`] unless the dialect
    /// overrides this; callers must check
    /// [`supports_sequence`](Self::supports_sequence) first.
    fn build_sequence_generator_sql(&self, sequence_name: &str) -> Result<String> {
        let _ = sequence_name;
        Err(DialectError::SequenceNotSupported(self.name()))
    }

    /// Returns a cheap, side-effect-free query for verifying that a
    /// connection is alive.
    fn ping_sql(&self) -> &'static str {
        "select 1"
    }

    /// Returns the per-column value convertor for this backend.
    fn column_convertor(&self) -> &dyn ColumnConvertor {
        &PassthroughConvertor
    }
}
