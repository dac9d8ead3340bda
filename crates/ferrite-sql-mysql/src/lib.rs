//! # ferrite-sql-mysql
//!
//! MySQL dialect for the ferrite-sql contract.
//!
//! MySQL signals failure classes through its vendor error code, so the
//! classifiers here compare that field; the SQLSTATE is ignored. Result
//! columns declared as DATE come back normalized to the timestamp
//! representation.

mod dialect;

pub use dialect::{MySqlColumnConvertor, MySqlDialect};
