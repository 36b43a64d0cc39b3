//! Depot-bounded visit sequence for one vehicle.

use serde::{Deserialize, Serialize};

/// One vehicle's ordered visit sequence, beginning and ending at the depot.
///
/// Node 0 is the depot; interior entries are distinct customer indices.
/// An empty route is the two-node sequence `0, 0` and is legal; it simply
/// means the vehicle stays at the depot.
///
/// # Examples
///
/// ```
/// use fleetroute::models::Route;
///
/// let route = Route::new(vec![0, 3, 1, 0]);
/// assert_eq!(route.interior(), &[3, 1]);
/// assert_eq!(route.head(), Some(3));
/// assert_eq!(route.tail(), Some(1));
/// assert!(Route::empty().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<usize>,
}

impl Route {
    /// Creates a route from a depot-bounded node sequence.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self { nodes }
    }

    /// The depot-to-depot route of a vehicle that serves no customers.
    pub fn empty() -> Self {
        Self::new(vec![0, 0])
    }

    /// A route serving a single customer: `0, customer, 0`.
    pub fn singleton(customer: usize) -> Self {
        Self::new(vec![0, customer, 0])
    }

    /// The full node sequence, including depot boundaries.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// The customers visited, in order (boundaries stripped).
    pub fn interior(&self) -> &[usize] {
        if self.nodes.len() < 2 {
            &[]
        } else {
            &self.nodes[1..self.nodes.len() - 1]
        }
    }

    /// Number of customers served by this route.
    pub fn num_customers(&self) -> usize {
        self.interior().len()
    }

    /// Returns `true` if this route serves no customers.
    pub fn is_empty(&self) -> bool {
        self.interior().is_empty()
    }

    /// First customer visited, if any.
    pub fn head(&self) -> Option<usize> {
        self.interior().first().copied()
    }

    /// Last customer visited, if any.
    pub fn tail(&self) -> Option<usize> {
        self.interior().last().copied()
    }
}
