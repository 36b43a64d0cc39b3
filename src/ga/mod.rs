//! Genetic algorithm over customer permutations.
//!
//! - [`GaConfig`] — Population size, generation count, operator rates
//! - [`operators`] — Order crossover and swap mutation
//! - [`decode`] — Contiguous-chunk decoding of a permutation into routes
//! - [`genetic_algorithm`] — Generational loop with elitism and
//!   fitness-proportional selection

mod config;
mod decode;
pub mod operators;
mod search;

pub use config::GaConfig;
pub use decode::decode;
pub use search::genetic_algorithm;
