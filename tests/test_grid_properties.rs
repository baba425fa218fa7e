/// Property-based tests for the grid and connectivity invariants
///
/// Uses proptest to verify invariants that must hold over arbitrary open
/// sequences, not just hand-picked scenarios.
use proptest::prelude::*;
use std::collections::HashSet;

use percolate::union_find::UnionFind;
use percolate::Percolation;

/// Property: open-site count equals the number of distinct opened coordinates
#[test]
fn prop_open_count_matches_distinct_sites() {
    proptest!(|(n in 1usize..12, opens in prop::collection::vec((0usize..12, 0usize..12), 0..80))| {
        let mut grid = Percolation::new(n).unwrap();
        let mut model: HashSet<(usize, usize)> = HashSet::new();

        for (row, col) in opens {
            let (row, col) = (row % n, col % n);
            grid.open(row, col).unwrap();
            model.insert((row, col));
            prop_assert_eq!(grid.number_of_open_sites(), model.len());
        }

        for row in 0..n {
            for col in 0..n {
                prop_assert_eq!(grid.is_open(row, col).unwrap(), model.contains(&(row, col)));
            }
        }
    });
}

/// Property: full implies open, at every step of any open sequence
#[test]
fn prop_full_implies_open() {
    proptest!(|(n in 1usize..10, opens in prop::collection::vec((0usize..10, 0usize..10), 0..60))| {
        let mut grid = Percolation::new(n).unwrap();
        for (row, col) in opens {
            grid.open(row % n, col % n).unwrap();
            for row in 0..n {
                for col in 0..n {
                    if grid.is_full(row, col).unwrap() {
                        prop_assert!(grid.is_open(row, col).unwrap());
                    }
                }
            }
        }
    });
}

/// Property: every open top-row site is full
#[test]
fn prop_open_top_row_sites_are_full() {
    proptest!(|(n in 1usize..10, cols in prop::collection::vec(0usize..10, 1..10))| {
        let mut grid = Percolation::new(n).unwrap();
        for col in cols {
            let col = col % n;
            grid.open(0, col).unwrap();
            prop_assert!(grid.is_full(0, col).unwrap());
        }
    });
}

/// Property: a fully open column percolates, for any n and any column
#[test]
fn prop_full_column_percolates() {
    proptest!(|(n in 1usize..16, col in 0usize..16)| {
        let mut grid = Percolation::new(n).unwrap();
        let col = col % n;
        for row in 0..n {
            prop_assert!(!grid.percolates());
            grid.open(row, col).unwrap();
        }
        prop_assert!(grid.percolates());
        for row in 0..n {
            prop_assert!(grid.is_full(row, col).unwrap());
        }
    });
}

/// Property: union-find set count equals elements minus merging unions
#[test]
fn prop_count_tracks_merging_unions() {
    proptest!(|(n in 1usize..64, pairs in prop::collection::vec((0usize..64, 0usize..64), 0..128))| {
        let mut uf = UnionFind::new(n);
        let mut merges = 0;
        for (a, b) in pairs {
            let (a, b) = (a % n, b % n);
            let before = uf.connected(a, b).unwrap();
            uf.union(a, b).unwrap();
            if !before {
                merges += 1;
            }
            prop_assert!(uf.connected(a, b).unwrap());
        }
        prop_assert_eq!(uf.count(), n - merges);
    });
}
