//! Constructive heuristics.
//!
//! - [`nearest_neighbor`] — Round-robin greedy construction, O(n²)
//! - [`clarke_wright`] — Savings-based route merging, O(n² log n)

mod clarke_wright;
mod nearest_neighbor;

pub use clarke_wright::clarke_wright;
pub use nearest_neighbor::nearest_neighbor;
