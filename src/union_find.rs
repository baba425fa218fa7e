/// Union-Find (Disjoint Sets) data structure for open-site connectivity
use crate::error::{PercolationError, Result};

/// Weighted quick-union over a fixed universe of elements
///
/// Merges attach the root of the smaller tree under the root of the larger
/// (union by size), bounding tree height to O(log n). `find` applies path
/// halving on the way up, so repeated queries amortize toward O(1).
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind {
            parent,
            size,
            sets: n,
        }
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if the universe is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct sets
    ///
    /// Starts at `len()` and drops by exactly one on every union that merges
    /// two previously separate sets.
    pub fn count(&self) -> usize {
        self.sets
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(PercolationError::ElementOutOfBounds {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Find the canonical representative of the set containing x
    ///
    /// Representatives are stable identifiers, not meaningful values: compare
    /// two `find` results for equality and nothing more. Walks parent links
    /// iteratively, halving the path as it goes.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        let mut x = x;
        while self.parent[x] != x {
            // Path halving: point x at its grandparent before stepping up
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        Ok(x)
    }

    /// Union the sets containing x and y
    ///
    /// No-op if x and y are already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> Result<()> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(());
        }

        // Union by size: smaller tree goes under the larger root
        let (small, large) = if self.size[root_x] < self.size[root_y] {
            (root_x, root_y)
        } else {
            (root_y, root_x)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        self.sets -= 1;
        Ok(())
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}
