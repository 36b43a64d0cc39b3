//! Metropolis annealing loop.
//!
//! # Algorithm
//!
//! Start from a random even split of the customers across the vehicles.
//! At each inner iteration, draw a neighbor and accept it unconditionally
//! when cheaper; otherwise accept with probability
//! `exp((current - neighbor) / temperature)`. The temperature cools
//! multiplicatively after each batch of inner iterations until it falls
//! below the floor. The best solution ever seen is tracked separately from
//! the accepted current solution and returned at the end, so the result
//! never regresses even when the walk does.
//!
//! # Reference
//!
//! Kirkpatrick, S., Gelatt, C.D. & Vecchi, M.P. (1983). "Optimization by
//! Simulated Annealing", *Science* 220(4598), 671-680.

use rand::seq::SliceRandom;
use rand::Rng;

use super::config::AnnealingConfig;
use super::neighbor::neighbor;
use crate::evaluation::solution_cost;
use crate::matrix::CostMatrix;
use crate::models::{Route, Solution};

/// Runs simulated annealing and returns the best solution found.
///
/// The random generator is owned by the caller; seeding it makes the run
/// reproducible.
///
/// # Panics
///
/// Panics if `num_vehicles` is zero.
///
/// # Examples
///
/// ```
/// use fleetroute::annealing::{simulated_annealing, AnnealingConfig};
/// use fleetroute::matrix::CostMatrix;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let config = AnnealingConfig::default().with_max_iterations(5_000);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let solution = simulated_annealing(&matrix, 1, &config, &mut rng);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn simulated_annealing<R: Rng>(
    matrix: &CostMatrix,
    num_vehicles: usize,
    config: &AnnealingConfig,
    rng: &mut R,
) -> Solution {
    assert!(num_vehicles >= 1, "at least one vehicle is required");

    let n = matrix.num_customers();
    let mut current = initial_solution(n, num_vehicles, rng);
    if n == 0 {
        return current;
    }
    let mut current_cost = solution_cost(&current, matrix);
    let mut best = current.clone();
    let mut best_cost = current_cost;

    let mut temperature = config.initial_temperature();
    let mut iterations: u64 = 0;

    'cooling: while temperature > config.min_temperature() {
        for _ in 0..config.iterations_per_temperature() {
            if config
                .max_iterations()
                .is_some_and(|cap| iterations >= cap)
            {
                break 'cooling;
            }
            iterations += 1;

            let candidate = neighbor(&current, config.max_move_attempts(), rng);
            let candidate_cost = solution_cost(&candidate, matrix);

            if candidate_cost < current_cost {
                current = candidate;
                current_cost = candidate_cost;
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                }
            } else {
                let delta = current_cost as f64 - candidate_cost as f64;
                if rng.random::<f64>() < (delta / temperature).exp() {
                    current = candidate;
                    current_cost = candidate_cost;
                }
            }
        }
        temperature *= config.cooling_rate();
    }

    best
}

/// Shuffles the customers and splits them into `num_vehicles` contiguous
/// chunks, as evenly as the count allows; earlier vehicles absorb the
/// remainder.
fn initial_solution<R: Rng>(n: usize, num_vehicles: usize, rng: &mut R) -> Solution {
    let mut customers: Vec<usize> = (1..=n).collect();
    customers.shuffle(rng);

    let per_vehicle = n / num_vehicles;
    let extra = n % num_vehicles;

    let mut routes = Vec::with_capacity(num_vehicles);
    let mut next = 0;
    for vehicle in 0..num_vehicles {
        let take = per_vehicle + usize::from(vehicle < extra);
        let mut nodes = Vec::with_capacity(take + 2);
        nodes.push(0);
        nodes.extend_from_slice(&customers[next..next + take]);
        nodes.push(0);
        next += take;
        routes.push(Route::new(nodes));
    }
    Solution::from_routes(routes)
}
