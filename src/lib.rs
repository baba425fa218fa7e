// Library exports for percolate
pub mod error;
pub mod monte_carlo;
pub mod percolation;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::Percolation;
