//! Neighbor generation for the annealing search.
//!
//! A neighbor differs from the current solution by exactly one structural
//! move, drawn uniformly from three kinds:
//!
//! - **swap** — exchange two interior customers within one route
//!   (needs ≥ 2 interior customers),
//! - **relocate** — move one interior customer to a different route,
//!   inserted before its closing depot (source needs ≥ 2 interior),
//! - **reversal** — reverse a contiguous interior segment within one route
//!   (needs ≥ 3 interior customers).
//!
//! A randomly drawn move can be structurally invalid (route too short,
//! same source and destination); generation retries up to a bounded number
//! of attempts and falls back to a copy of the current solution, which the
//! outer loop treats as a zero-cost-delta step.

use rand::Rng;

use crate::models::{Route, Solution};

/// Produces one neighbor of `solution`, or a copy of it when no valid move
/// is found within `max_attempts` tries.
pub(crate) fn neighbor<R: Rng>(solution: &Solution, max_attempts: u32, rng: &mut R) -> Solution {
    let mut routes: Vec<Vec<usize>> = solution
        .routes()
        .iter()
        .map(|r| r.nodes().to_vec())
        .collect();
    if routes.is_empty() {
        return solution.clone();
    }

    for _ in 0..max_attempts {
        match rng.random_range(0..3u8) {
            0 => {
                // Swap two interior positions within one route.
                let route = rng.random_range(0..routes.len());
                let len = routes[route].len();
                if len <= 3 {
                    continue;
                }
                let a = rng.random_range(1..len - 1);
                let b = rng.random_range(1..len - 1);
                routes[route].swap(a, b);
                return rebuild(routes);
            }
            1 => {
                // Relocate an interior customer to another route.
                let src = rng.random_range(0..routes.len());
                let dst = rng.random_range(0..routes.len());
                if src == dst || routes[src].len() <= 3 {
                    continue;
                }
                let pos = rng.random_range(1..routes[src].len() - 1);
                let customer = routes[src].remove(pos);
                let before_depot = routes[dst].len() - 1;
                routes[dst].insert(before_depot, customer);
                return rebuild(routes);
            }
            _ => {
                // Reverse a contiguous interior segment.
                let route = rng.random_range(0..routes.len());
                let len = routes[route].len();
                if len <= 4 {
                    continue;
                }
                let mut a = rng.random_range(1..len - 1);
                let mut b = rng.random_range(1..len - 1);
                if a > b {
                    std::mem::swap(&mut a, &mut b);
                }
                routes[route][a..=b].reverse();
                return rebuild(routes);
            }
        }
    }

    solution.clone()
}

fn rebuild(routes: Vec<Vec<usize>>) -> Solution {
    Solution::from_routes(routes.into_iter().map(Route::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_route_solution() -> Solution {
        Solution::from_routes(vec![
            Route::new(vec![0, 1, 2, 3, 0]),
            Route::new(vec![0, 4, 5, 0]),
        ])
    }

    #[test]
    fn test_neighbor_preserves_customers() {
        let solution = two_route_solution();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = neighbor(&solution, 10, &mut rng);
            let mut served = n.customers();
            served.sort_unstable();
            assert_eq!(served, vec![1, 2, 3, 4, 5]);
            assert_eq!(n.num_routes(), 2);
        }
    }

    #[test]
    fn test_neighbor_keeps_depot_boundaries() {
        let solution = two_route_solution();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let n = neighbor(&solution, 10, &mut rng);
            for route in n.routes() {
                assert_eq!(route.nodes().first(), Some(&0));
                assert_eq!(route.nodes().last(), Some(&0));
            }
        }
    }

    #[test]
    fn test_falls_back_when_no_move_is_valid() {
        // Single customer on a single route: no swap, relocate, or
        // reversal is structurally possible.
        let solution = Solution::from_routes(vec![Route::singleton(1)]);
        let mut rng = StdRng::seed_from_u64(3);
        let n = neighbor(&solution, 10, &mut rng);
        assert_eq!(n, solution);
    }

    #[test]
    fn test_empty_solution_is_returned_unchanged() {
        let solution = Solution::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(neighbor(&solution, 10, &mut rng), solution);
    }
}
