/// Percolation grid backed by two weighted union-find structures
use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// Orthogonal neighbor offsets: up, left, right, down
const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// An n-by-n grid of sites, each open or blocked, with connectivity queries
///
/// Sites live in a flat row-major matrix. Connectivity is tracked in two
/// union-find structures over the site indices plus virtual sentinels:
///
/// - the percolation structure has a virtual top node (index n*n) and a
///   virtual bottom node (index n*n + 1), so `percolates` is one find/find
///   comparison instead of an n-by-n scan;
/// - the fullness structure has only the virtual top node. Once the system
///   percolates, the bottom sentinel is connected to the top sentinel, and a
///   single shared structure would report every open bottom-row site as full
///   through that path (backwash). Keeping a second structure with no bottom
///   sentinel makes `is_full` immune to it.
///
/// The grid is the sole owner of both structures and `open` is the only
/// mutation entry point, which keeps the matrix, the counter, and the two
/// forests in lock-step.
#[derive(Debug)]
pub struct Percolation {
    n: usize,
    /// Row-major open/blocked matrix, true = open
    sites: Vec<bool>,
    open_sites: usize,
    /// Both sentinels; answers `percolates`
    percolation_uf: UnionFind,
    /// Top sentinel only; answers `is_full` without backwash
    fullness_uf: UnionFind,
}

impl Percolation {
    /// Create an n-by-n grid with all sites initially blocked
    ///
    /// Boundary rows are tied to their sentinels up front: the top row to the
    /// virtual top in both structures, the bottom row to the virtual bottom
    /// in the percolation structure only. Equivalent to unioning lazily on
    /// `open`, since a blocked site is never reported full or counted toward
    /// percolation.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidGridSize { n });
        }

        let site_count = n * n;
        let mut percolation_uf = UnionFind::new(site_count + 2);
        let mut fullness_uf = UnionFind::new(site_count + 1);

        let virtual_top = site_count;
        let virtual_bottom = site_count + 1;
        let bottom_row = site_count - n;
        for col in 0..n {
            percolation_uf.union(virtual_top, col)?;
            percolation_uf.union(virtual_bottom, bottom_row + col)?;
            fullness_uf.union(virtual_top, col)?;
        }

        Ok(Percolation {
            n,
            sites: vec![false; site_count],
            open_sites: 0,
            percolation_uf,
            fullness_uf,
        })
    }

    /// Grid dimension n
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    #[inline]
    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Convert a 2-D site coordinate to its 1-D index (row-major)
    #[inline]
    fn to_1d(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    fn validate(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.n || col >= self.n {
            return Err(PercolationError::SiteOutOfBounds {
                row,
                col,
                n: self.n,
            });
        }
        Ok(())
    }

    /// Open the site (row, col) if it is not open already
    ///
    /// Re-opening an open site is a designed no-op: the counter does not move
    /// and no unions happen. Validation precedes all mutation, so a rejected
    /// call leaves the grid untouched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.validate(row, col)?;

        let index = self.to_1d(row, col);
        if self.sites[index] {
            return Ok(());
        }
        self.sites[index] = true;
        self.open_sites += 1;
        self.connect_neighbors(row, col)
    }

    /// Union a newly opened site with its open orthogonal neighbors
    ///
    /// Applied to both structures so fullness and percolation stay in step.
    fn connect_neighbors(&mut self, row: usize, col: usize) -> Result<()> {
        let index = self.to_1d(row, col);
        let n = self.n as isize;
        for (row_offset, col_offset) in NEIGHBOR_OFFSETS {
            let neighbor_row = row as isize + row_offset;
            let neighbor_col = col as isize + col_offset;
            if neighbor_row < 0 || neighbor_row >= n || neighbor_col < 0 || neighbor_col >= n {
                continue;
            }
            let neighbor = self.to_1d(neighbor_row as usize, neighbor_col as usize);
            if self.sites[neighbor] {
                self.percolation_uf.union(index, neighbor)?;
                self.fullness_uf.union(index, neighbor)?;
            }
        }
        Ok(())
    }

    /// Is the site (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        Ok(self.sites[self.to_1d(row, col)])
    }

    /// Is the site (row, col) full, i.e. connected to the top row through a
    /// chain of open orthogonal neighbors?
    ///
    /// Blocked sites are never full. Queries the fullness structure, whose
    /// missing bottom sentinel keeps a percolated system from making an
    /// isolated bottom-row site look full. Takes `&mut self` because `find`
    /// compresses paths; observable state is unchanged.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.validate(row, col)?;
        let index = self.to_1d(row, col);
        if !self.sites[index] {
            return Ok(false);
        }
        let top = self.virtual_top();
        Ok(self.fullness_uf.find(index)? == self.fullness_uf.find(top)?)
    }

    /// Number of open sites
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Does the system percolate?
    ///
    /// With no open sites the sentinel-to-sentinel comparison would lie for
    /// n == 1, where the single site is wired to both sentinels at
    /// construction while still blocked, so the empty grid short-circuits.
    pub fn percolates(&mut self) -> bool {
        if self.open_sites == 0 {
            return false;
        }
        let top = self.virtual_top();
        let bottom = self.virtual_bottom();
        // Sentinels are always in range; a connectivity error cannot occur
        matches!(self.percolation_uf.connected(top, bottom), Ok(true))
    }
}
