//! Baseline dialect for backends with no special configuration.

use super::Dialect;

/// The baseline dialect.
///
/// Takes every default of the [`Dialect`] contract: row-number subquery
/// pagination, no capability flags, no classifier signals. Usable directly
/// against backends that need nothing more, and the reference point for what
/// a concrete dialect inherits when it does not override.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDialect;

impl DefaultDialect {
    /// Creates the baseline dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for DefaultDialect {
    fn name(&self) -> &'static str {
        "default"
    }
}
