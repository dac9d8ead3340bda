//! The requested result window for a paginated query.

/// A requested result window: a 1-based start position and a row cap.
///
/// Constructed once per query execution request by the caller and never
/// mutated. `SelectOption::new(5, 10)` means "start at row 5 and return at
/// most 10 rows", so rows 5..=14 of the unpaginated result.
///
/// Rewriters consume the zero-based [`offset`](Self::offset) derived from
/// the start position; a limit of `0` means "no cap".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectOption {
    position: u64,
    limit: u64,
}

impl SelectOption {
    /// Creates a window starting at the given 1-based row position.
    ///
    /// A position of `0` is treated the same as `1` (no rows skipped).
    #[must_use]
    pub const fn new(position: u64, limit: u64) -> Self {
        Self { position, limit }
    }

    /// The 1-based start position as given.
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// The number of rows to skip: `position - 1`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.position.saturating_sub(1)
    }

    /// The maximum number of rows to return; `0` means unlimited.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}
