/// Monte Carlo trial driver for the percolation grid
///
/// Opens uniformly random sites until the system percolates. Each call is one
/// independent trial; aggregating fractions across trials is the caller's
/// business.
use log::debug;
use rand::Rng;

use crate::error::Result;
use crate::percolation::Percolation;

/// Open uniformly random sites until the grid percolates
///
/// Draws (row, col) uniformly over the whole grid each step; hitting an
/// already-open site is harmless since `open` is idempotent. Returns the
/// open-site count at the moment percolation is first observed.
pub fn open_until_percolation<R: Rng>(grid: &mut Percolation, rng: &mut R) -> Result<usize> {
    let n = grid.size();
    while !grid.percolates() {
        let row = rng.gen_range(0..n);
        let col = rng.gen_range(0..n);
        grid.open(row, col)?;
    }
    Ok(grid.number_of_open_sites())
}

/// Run one independent trial on a fresh n-by-n grid
///
/// Returns the vacancy fraction open_sites / n^2 at the percolation point.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    let open_sites = open_until_percolation(&mut grid, rng)?;
    debug!(
        "trial percolated with {open_sites}/{} sites open",
        n * n
    );
    Ok(open_sites as f64 / (n * n) as f64)
}
