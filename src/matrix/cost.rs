//! Dense travel-cost matrix with a depot column.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;

/// An n×(n+1) travel-cost table for n customers and one depot.
///
/// Row `i` (0-based) describes customer `i + 1`. Column 0 holds the cost
/// between that customer and the depot; column `j ≥ 1` holds the cost to
/// customer `j`. The row count fixes the customer set `1..=n` for the
/// whole run. Entries are non-negative integers.
///
/// # Examples
///
/// ```
/// use fleetroute::matrix::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![4, 0, 2, 9],
///     vec![1, 2, 0, 3],
///     vec![5, 9, 3, 0],
/// ]).unwrap();
/// assert_eq!(matrix.num_customers(), 3);
/// assert_eq!(matrix.travel(0, 1), 4); // depot → customer 1, column 0 of row 0
/// assert_eq!(matrix.travel(1, 3), 9); // customer 1 → customer 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostMatrix {
    data: Vec<u64>,
    num_customers: usize,
}

impl CostMatrix {
    /// Builds a matrix from n rows of `n + 1` entries each.
    ///
    /// Returns [`RoutingError::MalformedRow`] if any row has the wrong width.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, RoutingError> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * (n + 1));
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n + 1 {
                return Err(RoutingError::MalformedRow {
                    row: i,
                    expected: n + 1,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            num_customers: n,
        })
    }

    /// Number of customers n (nodes are `0..=n`, with 0 the depot).
    pub fn num_customers(&self) -> usize {
        self.num_customers
    }

    /// Raw table entry at customer row `row` (0-based) and column `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n` or `col > n`.
    pub fn get(&self, row: usize, col: usize) -> u64 {
        assert!(row < self.num_customers && col <= self.num_customers);
        self.data[row * (self.num_customers + 1) + col]
    }

    /// Travel cost between two nodes, resolving the depot through column 0.
    ///
    /// A depot-to-depot hop costs nothing; any hop touching the depot reads
    /// column 0 of the customer's row; a customer-to-customer hop reads the
    /// origin's row at the destination's column. This asymmetric encoding is
    /// the single lookup rule shared by every solver.
    ///
    /// # Panics
    ///
    /// Panics if either node index exceeds `n`.
    pub fn travel(&self, from: usize, to: usize) -> u64 {
        if from == 0 && to == 0 {
            0
        } else if to == 0 {
            self.get(from - 1, 0)
        } else if from == 0 {
            self.get(to - 1, 0)
        } else {
            self.get(from - 1, to)
        }
    }
}
