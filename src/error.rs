use thiserror::Error;

/// Errors surfaced by the fitting and layout routines.
///
/// Nothing is retried internally; every failure is returned to the immediate
/// caller, which may fall back to a coarser layout algorithm if it wants to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Malformed input: empty distribution, non-positive weight, zero budget.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No zero-free partition exists (budget smaller than the item count).
    #[error("cannot split {items} slices across {parts} items without zeros")]
    Infeasible { items: u32, parts: usize },

    /// Too many width-1 entries to keep them separated and off the ends.
    #[error("cannot separate {slivers} slivers with only {blocks} larger slices")]
    Overconstrained { slivers: usize, blocks: usize },

    /// Every group stayed pinned even after dropping all height locks.
    #[error("no scalable group left after dropping all height locks")]
    Unallocatable,
}

pub type Result<T> = std::result::Result<T, LayoutError>;
