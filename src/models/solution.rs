//! A complete set of routes, one per vehicle slot.

use serde::{Deserialize, Serialize};

use super::Route;

/// The full route set of a run: one [`Route`] per vehicle slot, in slot order.
///
/// A valid solution visits every customer `1..=n` exactly once across all
/// routes. Vehicles that serve no customers keep their depot-to-depot route
/// rather than being dropped, so the route count always equals the vehicle
/// count the run was configured with.
///
/// # Examples
///
/// ```
/// use fleetroute::models::{Route, Solution};
///
/// let solution = Solution::from_routes(vec![
///     Route::new(vec![0, 2, 1, 0]),
///     Route::singleton(3),
/// ]);
/// assert_eq!(solution.num_routes(), 2);
/// assert_eq!(solution.num_served(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution from an ordered route set.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The routes, in vehicle-slot order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of vehicle slots.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.num_customers()).sum()
    }

    /// All served customers in route order, boundaries stripped.
    pub fn customers(&self) -> Vec<usize> {
        self.routes
            .iter()
            .flat_map(|r| r.interior().iter().copied())
            .collect()
    }
}
