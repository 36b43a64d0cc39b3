//! Simulated annealing over route-level moves.
//!
//! - [`AnnealingConfig`] — Temperature schedule and move-retry parameters
//! - [`simulated_annealing`] — Metropolis search over swap, relocate, and
//!   segment-reversal neighbors

mod config;
mod neighbor;
mod search;

pub use config::AnnealingConfig;
pub use search::simulated_annealing;
