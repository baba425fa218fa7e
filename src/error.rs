/// Typed errors for the percolation core
///
/// Every variant is a programming-contract violation (bad grid size or bad
/// index), raised synchronously at the offending call before any state is
/// mutated. Nothing here is transient, so there is no retry story; callers
/// wanting graceful degradation validate their inputs upstream.
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Errors raised by the grid and its connectivity structures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercolationError {
    /// Grid construction with a zero dimension
    #[error("grid size must be at least 1, got {n}")]
    InvalidGridSize { n: usize },

    /// A (row, col) coordinate outside the n-by-n grid
    #[error("site ({row}, {col}) out of bounds for {n}x{n} grid")]
    SiteOutOfBounds { row: usize, col: usize, n: usize },

    /// A raw element index outside a union-find universe
    #[error("element {index} out of bounds for union-find over {len} elements")]
    ElementOutOfBounds { index: usize, len: usize },
}
