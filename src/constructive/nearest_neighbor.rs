//! Nearest-neighbor constructive heuristic.
//!
//! # Algorithm
//!
//! All vehicles start at the depot. Vehicles take turns round-robin; on
//! its turn a vehicle appends the cheapest unvisited customer reachable
//! from the last node of its route. Ties break toward the lowest customer
//! index, so the construction is fully deterministic. Once every customer
//! is placed, each route is closed with a depot suffix.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use crate::matrix::CostMatrix;
use crate::models::{Route, Solution};

/// Builds a solution by round-robin nearest-neighbor selection.
///
/// Always produces a complete solution: every customer appears exactly
/// once, and vehicles that never get a customer keep a depot-to-depot
/// route.
///
/// # Panics
///
/// Panics if `num_vehicles` is zero.
///
/// # Examples
///
/// ```
/// use fleetroute::matrix::CostMatrix;
/// use fleetroute::constructive::nearest_neighbor;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![2, 0, 1, 9],
///     vec![4, 1, 0, 3],
///     vec![6, 9, 3, 0],
/// ]).unwrap();
///
/// let solution = nearest_neighbor(&matrix, 1);
/// // Depot → 1 (2), then 1 → 2 (1), then 2 → 3 (3), back home (6).
/// assert_eq!(solution.routes()[0].nodes(), &[0, 1, 2, 3, 0]);
/// ```
pub fn nearest_neighbor(matrix: &CostMatrix, num_vehicles: usize) -> Solution {
    assert!(num_vehicles >= 1, "at least one vehicle is required");

    let n = matrix.num_customers();
    let mut visited = vec![false; n + 1];
    let mut routes: Vec<Vec<usize>> = vec![vec![0]; num_vehicles];

    let mut vehicle = 0;
    let mut remaining = n;
    while remaining > 0 {
        let last = routes[vehicle][routes[vehicle].len() - 1];

        let mut nearest: Option<(usize, u64)> = None;
        for customer in 1..=n {
            if visited[customer] {
                continue;
            }
            let cost = matrix.travel(last, customer);
            if nearest.is_none_or(|(_, best)| cost < best) {
                nearest = Some((customer, cost));
            }
        }

        if let Some((customer, _)) = nearest {
            routes[vehicle].push(customer);
            visited[customer] = true;
            remaining -= 1;
        }

        vehicle = (vehicle + 1) % num_vehicles;
    }

    for route in &mut routes {
        route.push(0);
    }
    Solution::from_routes(routes.into_iter().map(Route::new).collect())
}
