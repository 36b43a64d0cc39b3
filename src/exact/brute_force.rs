//! Exhaustive ordered-partition search.
//!
//! # Algorithm
//!
//! Recursive backtracking: at every step, pick any still-unassigned
//! customer and append it to any existing slot or to one freshly opened
//! slot, up to the vehicle count. A new slot always opens at the current
//! slot count, which prunes partitions that differ solely in slot creation
//! order. Each completed assignment is wrapped with depot boundaries,
//! scored, and the minimum retained. Within a slot, visit order follows
//! insertion order; because the picking loop tries every remaining
//! customer at every depth, the insertion sequences reach the route
//! orderings.
//!
//! # Complexity
//!
//! Worse than factorial in the customer count. Callers are expected to cap
//! n (eight to ten customers in practice) before invoking; the search
//! itself applies no guard.

use crate::evaluation::solution_cost;
use crate::matrix::CostMatrix;
use crate::models::{Route, Solution};

/// Finds the minimum-cost solution by exhaustive partition search.
///
/// With no customers the result is `num_vehicles` empty depot-to-depot
/// routes. Returned solutions are always padded to `num_vehicles` route
/// slots, so vehicles left unused appear as empty routes.
///
/// # Panics
///
/// Panics if `num_vehicles` is zero.
///
/// # Examples
///
/// ```
/// use fleetroute::matrix::CostMatrix;
/// use fleetroute::exact::brute_force;
/// use fleetroute::evaluation::solution_cost;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 0, 20, 20],
///     vec![7, 20, 0, 1],
///     vec![7, 20, 1, 0],
/// ]).unwrap();
///
/// let best = brute_force(&matrix, 2);
/// assert_eq!(best.num_served(), 3);
/// // Customer 1 alone (1+1), customers 2 and 3 together (7+1+7); any
/// // single tour pays at least one 20 bridge and costs 29 or more.
/// assert_eq!(solution_cost(&best, &matrix), 17);
/// ```
pub fn brute_force(matrix: &CostMatrix, num_vehicles: usize) -> Solution {
    assert!(num_vehicles >= 1, "at least one vehicle is required");

    let n = matrix.num_customers();
    let mut search = Search {
        matrix,
        num_vehicles,
        best: None,
        best_cost: u64::MAX,
    };
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut remaining: Vec<usize> = (1..=n).collect();
    search.assign(&mut groups, &mut remaining);

    match search.best {
        Some(solution) => solution,
        // Unreachable in practice: the base case always scores at least
        // the empty assignment.
        None => Solution::from_routes(vec![Route::empty(); num_vehicles]),
    }
}

struct Search<'a> {
    matrix: &'a CostMatrix,
    num_vehicles: usize,
    best: Option<Solution>,
    best_cost: u64,
}

impl Search<'_> {
    /// Extends the partial assignment in `groups` with every remaining
    /// customer in turn, placing it into each existing slot and, while
    /// slots are left, into one freshly opened slot.
    fn assign(&mut self, groups: &mut Vec<Vec<usize>>, remaining: &mut Vec<usize>) {
        if remaining.is_empty() {
            self.score(groups);
            return;
        }

        for idx in 0..remaining.len() {
            let customer = remaining.remove(idx);

            let open_slots = (groups.len() + 1).min(self.num_vehicles);
            for slot in 0..open_slots {
                if groups.len() <= slot {
                    groups.push(Vec::new());
                }
                groups[slot].push(customer);

                self.assign(groups, remaining);

                groups[slot].pop();
                if slot + 1 == groups.len() && groups[slot].is_empty() {
                    groups.pop();
                }
            }

            remaining.insert(idx, customer);
        }
    }

    fn score(&mut self, groups: &[Vec<usize>]) {
        let mut routes: Vec<Route> = groups
            .iter()
            .map(|group| {
                let mut nodes = Vec::with_capacity(group.len() + 2);
                nodes.push(0);
                nodes.extend_from_slice(group);
                nodes.push(0);
                Route::new(nodes)
            })
            .collect();
        while routes.len() < self.num_vehicles {
            routes.push(Route::empty());
        }

        let candidate = Solution::from_routes(routes);
        let cost = solution_cost(&candidate, self.matrix);
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best = Some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::solution_cost;

    #[test]
    fn test_no_customers_yields_empty_routes() {
        let matrix = CostMatrix::from_rows(vec![]).expect("empty matrix");
        let best = brute_force(&matrix, 3);
        assert_eq!(best.num_routes(), 3);
        assert!(best.routes().iter().all(|r| r.is_empty()));
        assert_eq!(solution_cost(&best, &matrix), 0);
    }

    #[test]
    fn test_single_customer() {
        let matrix = CostMatrix::from_rows(vec![vec![5, 0]]).expect("valid");
        let best = brute_force(&matrix, 2);
        assert_eq!(best.num_routes(), 2);
        assert_eq!(best.num_served(), 1);
        assert_eq!(solution_cost(&best, &matrix), 10);
    }

    #[test]
    fn test_optimum_on_hand_computed_instance() {
        // Customers 2 and 3 are close to each other but far from the depot;
        // customer 1 sits next to the depot, 20 away from both others. Any
        // single tour crosses a 20 bridge (cheapest is 1+20+1+7 = 29).
        let matrix = CostMatrix::from_rows(vec![
            vec![1, 0, 20, 20],
            vec![7, 20, 0, 1],
            vec![7, 20, 1, 0],
        ])
        .expect("valid");
        let best = brute_force(&matrix, 2);
        // Best split: [1] and [2, 3] (or [3, 2]) = 2 + 15 = 17.
        assert_eq!(solution_cost(&best, &matrix), 17);
        assert_eq!(best.num_served(), 3);
    }

    #[test]
    fn test_uses_second_vehicle_when_split_is_cheaper() {
        // Both customers sit next to the depot but far from each other;
        // two separate round trips cost 4, any shared route at least 102.
        let matrix = CostMatrix::from_rows(vec![
            vec![1, 0, 100],
            vec![1, 100, 0],
        ])
        .expect("valid");
        let best = brute_force(&matrix, 2);
        assert_eq!(solution_cost(&best, &matrix), 4);
        assert!(best.routes().iter().all(|r| r.num_customers() == 1));
    }

    #[test]
    fn test_four_customers_two_vehicles() {
        // Two tight pairs: (1, 2) near each other, (3, 4) near each other,
        // all at distance 10 from the depot, cross edges cost 20.
        let matrix = CostMatrix::from_rows(vec![
            vec![10, 0, 1, 20, 20],
            vec![10, 1, 0, 20, 20],
            vec![10, 20, 20, 0, 1],
            vec![10, 20, 20, 1, 0],
        ])
        .expect("valid");
        let best = brute_force(&matrix, 2);
        // Optimal pairs each cost 10 + 1 + 10 = 21.
        assert_eq!(solution_cost(&best, &matrix), 42);
    }

    #[test]
    fn test_matches_cost_recomputation() {
        let matrix = CostMatrix::from_rows(vec![
            vec![2, 0, 3, 4],
            vec![5, 3, 0, 1],
            vec![6, 4, 1, 0],
        ])
        .expect("valid");
        let best = brute_force(&matrix, 1);
        assert_eq!(best.num_served(), 3);
        assert!(solution_cost(&best, &matrix) > 0);
    }
}
