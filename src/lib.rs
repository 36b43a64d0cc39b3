//! # fleetroute
//!
//! Vehicle routing solvers over a shared route model: given a depot, a set
//! of customer nodes, and a pairwise travel-cost matrix, partition the
//! customers among a fixed number of vehicles and order each vehicle's
//! visits to minimize total travel cost.
//!
//! ## Modules
//!
//! - [`matrix`] — Travel-cost matrix (n customer rows, depot column 0)
//! - [`models`] — Route and Solution types (depot-bounded node sequences)
//! - [`evaluation`] — Pure route and solution cost functions
//! - [`exact`] — Exhaustive partition search for small instances
//! - [`constructive`] — Nearest-neighbor and Clarke-Wright savings heuristics
//! - [`annealing`] — Simulated annealing over swap/relocate/reversal moves
//! - [`ga`] — Genetic algorithm over customer permutations
//! - [`solver`] — Strategy selection and a validated entry point

pub mod annealing;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod ga;
pub mod matrix;
pub mod models;
pub mod solver;
