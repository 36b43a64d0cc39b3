//! Pure cost functions over routes and solutions.
//!
//! Every solver scores candidates through these two functions, so the
//! depot-column edge rule lives in exactly one place
//! ([`CostMatrix::travel`]). Consecutive depot entries contribute nothing,
//! and a route that does not end at the depot is charged an implicit
//! return edge.

use crate::matrix::CostMatrix;
use crate::models::{Route, Solution};

/// Total travel cost of a single route.
///
/// Walks consecutive node pairs, charging each hop via
/// [`CostMatrix::travel`]. If the route's last node is not the depot, the
/// return-to-depot edge is added implicitly.
///
/// # Examples
///
/// ```
/// use fleetroute::matrix::CostMatrix;
/// use fleetroute::models::Route;
/// use fleetroute::evaluation::route_cost;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![4, 0, 2, 9],
///     vec![1, 2, 0, 3],
///     vec![5, 9, 3, 0],
/// ]).unwrap();
///
/// // 0→1 (4) + 1→2 (2) + 2→3 (3) + 3→0 (5) = 14
/// assert_eq!(route_cost(&Route::new(vec![0, 1, 2, 3, 0]), &matrix), 14);
/// assert_eq!(route_cost(&Route::empty(), &matrix), 0);
/// ```
pub fn route_cost(route: &Route, matrix: &CostMatrix) -> u64 {
    let mut total = 0;
    let mut prev = 0;
    for &curr in route.nodes() {
        total += matrix.travel(prev, curr);
        prev = curr;
    }
    if route.nodes().last().is_some_and(|&last| last != 0) {
        total += matrix.travel(prev, 0);
    }
    total
}

/// Total travel cost of a solution: the sum of its route costs.
pub fn solution_cost(solution: &Solution, matrix: &CostMatrix) -> u64 {
    solution.routes().iter().map(|r| route_cost(r, matrix)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![4, 0, 2, 9],
            vec![1, 2, 0, 3],
            vec![5, 9, 3, 0],
        ])
        .expect("valid rows")
    }

    #[test]
    fn test_empty_route_costs_nothing() {
        assert_eq!(route_cost(&Route::empty(), &sample()), 0);
    }

    #[test]
    fn test_singleton_round_trip() {
        // 0→2 (1) + 2→0 (1)
        assert_eq!(route_cost(&Route::singleton(2), &sample()), 2);
    }

    #[test]
    fn test_full_tour() {
        let r = Route::new(vec![0, 1, 2, 3, 0]);
        assert_eq!(route_cost(&r, &sample()), 14);
    }

    #[test]
    fn test_implicit_return_edge() {
        // Missing trailing depot: 0→1 (4) + 1→3 (9) + implicit 3→0 (5)
        let open = Route::new(vec![0, 1, 3]);
        let closed = Route::new(vec![0, 1, 3, 0]);
        let m = sample();
        assert_eq!(route_cost(&open, &m), 18);
        assert_eq!(route_cost(&open, &m), route_cost(&closed, &m));
    }

    #[test]
    fn test_depot_adjacency_is_free() {
        let r = Route::new(vec![0, 0, 2, 0, 0]);
        assert_eq!(route_cost(&r, &sample()), 2);
    }

    #[test]
    fn test_solution_cost_sums_routes() {
        let m = sample();
        let s = Solution::from_routes(vec![
            Route::singleton(1), // 4 + 4
            Route::empty(),
            Route::new(vec![0, 2, 3, 0]), // 1 + 3 + 5
        ]);
        assert_eq!(solution_cost(&s, &m), 17);
    }
}
