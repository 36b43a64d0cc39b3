//! Strategy selection and the validated entry point.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::annealing::{simulated_annealing, AnnealingConfig};
use crate::constructive::{clarke_wright, nearest_neighbor};
use crate::error::RoutingError;
use crate::exact::brute_force;
use crate::ga::{genetic_algorithm, GaConfig};
use crate::matrix::CostMatrix;
use crate::models::Solution;

/// The available solution strategies.
///
/// All strategies share the same contract: a [`CostMatrix`] and a vehicle
/// count in, one complete [`Solution`] out. They are mutually
/// substitutable; only quality and running time differ.
///
/// # Examples
///
/// ```
/// use fleetroute::solver::Strategy;
///
/// let strategy: Strategy = "savings".parse().unwrap();
/// assert_eq!(strategy, Strategy::Savings);
/// assert!("fastest".parse::<Strategy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive partition search; only for very small instances.
    Exact,
    /// Round-robin nearest-neighbor construction.
    Greedy,
    /// Clarke-Wright savings merge.
    Savings,
    /// Simulated annealing with default schedule.
    Annealing,
    /// Genetic algorithm with default parameters.
    Genetic,
}

impl FromStr for Strategy {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "greedy" => Ok(Self::Greedy),
            "savings" => Ok(Self::Savings),
            "annealing" => Ok(Self::Annealing),
            "genetic" => Ok(Self::Genetic),
            other => Err(RoutingError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Greedy => "greedy",
            Self::Savings => "savings",
            Self::Annealing => "annealing",
            Self::Genetic => "genetic",
        };
        f.write_str(name)
    }
}

/// Runs the selected strategy with its default configuration.
///
/// Validates the vehicle count up front; this is the boundary where a
/// non-positive count surfaces as [`RoutingError::InvalidVehicleCount`]
/// instead of a panic. The random generator is used by the annealing and
/// genetic strategies and ignored by the deterministic ones.
///
/// # Examples
///
/// ```
/// use fleetroute::matrix::CostMatrix;
/// use fleetroute::solver::{solve, Strategy};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let solution = solve(Strategy::Greedy, &matrix, 2, &mut rng).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert!(solve(Strategy::Greedy, &matrix, 0, &mut rng).is_err());
/// ```
pub fn solve<R: Rng>(
    strategy: Strategy,
    matrix: &CostMatrix,
    num_vehicles: usize,
    rng: &mut R,
) -> Result<Solution, RoutingError> {
    if num_vehicles == 0 {
        return Err(RoutingError::InvalidVehicleCount);
    }
    Ok(match strategy {
        Strategy::Exact => brute_force(matrix, num_vehicles),
        Strategy::Greedy => nearest_neighbor(matrix, num_vehicles),
        Strategy::Savings => clarke_wright(matrix, num_vehicles),
        Strategy::Annealing => {
            simulated_annealing(matrix, num_vehicles, &AnnealingConfig::default(), rng)
        }
        Strategy::Genetic => genetic_algorithm(matrix, num_vehicles, &GaConfig::default(), rng),
    })
}
