//! # ferrite-sql-tidb
//!
//! TiDB dialect for the ferrite-sql contract.
//!
//! TiDB speaks the MySQL wire protocol but signals failure classes through
//! the SQLSTATE field, paginates with a trailing `limit offset, count`
//! clause, and supports sequences, identity columns, and offset pagination
//! natively.

mod dialect;

pub use dialect::TiDbDialect;
