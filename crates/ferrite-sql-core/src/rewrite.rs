//! Textual SQL rewriting for pagination windows and row counting.
//!
//! Input SQL is opaque: rewriting wraps or appends text, it never parses.
//! Two pagination syntax families cover every supported backend; which one a
//! dialect uses is part of its fixed configuration.

use crate::select_option::SelectOption;

/// Row-count sentinel for "offset only" windows in the trailing-clause
/// family. Engines with `LIMIT offset, count` grammar have no keyword for
/// "all remaining rows", so the largest 32-bit signed value stands in.
pub const UNBOUNDED_ROW_COUNT: u64 = 2_147_483_647;

/// The pagination syntax family a backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// A single `limit [offset,] count` clause appended to the query
    /// (MySQL-family grammar).
    TrailingLimit,
    /// The query wrapped twice so a `ROWNUM_` counter column can be
    /// filtered (engines without a native limit/offset clause).
    RowNumberSubquery,
}

impl PaginationStyle {
    /// Rewrites `sql` so it returns only the requested window.
    ///
    /// A window with neither offset nor limit is a no-op: the input is
    /// returned unchanged rather than gaining a degenerate clause.
    #[must_use]
    pub fn rewrite(self, sql: &str, option: &SelectOption) -> String {
        match self {
            Self::TrailingLimit => append_limit_clause(sql, option),
            Self::RowNumberSubquery => wrap_row_number_filter(sql, option),
        }
    }
}

/// Appends a `limit` clause for the requested window.
///
/// The offset, when present, rides in the first clause argument. An
/// offset-only window gets [`UNBOUNDED_ROW_COUNT`] as its row count since
/// the clause cannot express "skip N, return the rest" directly.
#[must_use]
pub fn append_limit_clause(sql: &str, option: &SelectOption) -> String {
    let offset = option.offset();
    let limit = option.limit();
    match (offset > 0, limit > 0) {
        (false, false) => sql.to_string(),
        (false, true) => format!("{sql} limit {limit}"),
        (true, true) => format!("{sql} limit {offset}, {limit}"),
        (true, false) => format!("{sql} limit {offset}, {UNBOUNDED_ROW_COUNT}"),
    }
}

/// Wraps the query so a 1-based `ROWNUM_` counter can be filtered.
///
/// The inner wrap materializes the counter before the outer `WHERE` reads
/// it. The lower bound is a strict `>` against the zero-based offset, so an
/// offset of 4 starts the window at the fifth row; the upper bound is
/// inclusive at `offset + limit`.
#[must_use]
pub fn wrap_row_number_filter(sql: &str, option: &SelectOption) -> String {
    let offset = option.offset();
    let limit = option.limit();
    if offset == 0 && limit == 0 {
        return sql.to_string();
    }

    let mut result = String::with_capacity(sql.len() + 96);
    result.push_str("SELECT SUB2.* FROM (SELECT SUB1.*, ROWNUM ROWNUM_ FROM (");
    result.push_str(sql);
    result.push_str(") SUB1) SUB2 WHERE");
    if offset > 0 {
        result.push_str(&format!(" SUB2.ROWNUM_ > {offset}"));
    }
    if limit > 0 {
        if offset > 0 {
            result.push_str(&format!(" AND SUB2.ROWNUM_ <= {}", offset + limit));
        } else {
            result.push_str(&format!(" SUB2.ROWNUM_ <= {limit}"));
        }
    }
    result
}

/// Wraps the query so it returns a single row holding the original row
/// count. The wrapper is the same for every backend and tolerates an
/// `ORDER BY` in the wrapped query.
#[must_use]
pub fn wrap_count(sql: &str) -> String {
    format!("SELECT COUNT(*) COUNT_ FROM ({sql}) SUB_")
}
