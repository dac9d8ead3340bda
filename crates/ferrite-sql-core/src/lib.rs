//! # ferrite-sql-core
//!
//! Backend-portable SQL dialect contract for a data-access layer.
//!
//! Relational backends disagree on pagination grammar, on how they signal
//! errors, and on a handful of capabilities (sequences, identity columns).
//! This crate lets the rest of a data-access stack emit one logical
//! operation — "paginate this query", "count the rows of this query",
//! "was this failure a duplicate key or a timeout" — and have it translated
//! for whichever backend is configured, with no backend branching anywhere
//! else.
//!
//! The seam is the [`Dialect`] trait: an immutable, stateless strategy
//! object, one instance per backend family, safe to share across threads
//! for the lifetime of the process. Shared behavior lives in the trait's
//! default methods; a concrete dialect is a thin, fixed configuration of
//! capability flags, classifier signals, and a pagination syntax family.
//!
//! ## Rewriting
//!
//! Input SQL is treated as an opaque string. Pagination and row-counting
//! rewrites are textual composition only — there is no SQL parser here,
//! deliberately:
//!
//! ```rust
//! use ferrite_sql_core::{DefaultDialect, Dialect, SelectOption};
//!
//! let dialect = DefaultDialect::new();
//! let sql = dialect.convert_pagination_sql("select * from book", &SelectOption::new(5, 10));
//! assert_eq!(
//!     sql,
//!     "SELECT SUB2.* FROM (SELECT SUB1.*, ROWNUM ROWNUM_ FROM (select * from book) SUB1) SUB2 \
//!      WHERE SUB2.ROWNUM_ > 4 AND SUB2.ROWNUM_ <= 14"
//! );
//! ```
//!
//! ## Error classification
//!
//! A [`SqlFailure`] carries the vendor error code and SQLSTATE reported by
//! the driver. Each dialect matches exactly one of those fields against its
//! fixed signal values; anything unrecognized stays unclassified and must be
//! propagated unchanged by the caller.

pub mod convert;
pub mod dialect;
pub mod error;
pub mod rewrite;
pub mod select_option;
pub mod value;

pub use convert::{ColumnConvertor, PassthroughConvertor};
pub use dialect::{DefaultDialect, Dialect};
pub use error::{DialectError, Result, SqlFailure};
pub use rewrite::PaginationStyle;
pub use select_option::SelectOption;
pub use value::{SqlType, SqlValue};
