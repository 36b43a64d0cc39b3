//! Exhaustive search for small instances.

mod brute_force;

pub use brute_force::brute_force;
