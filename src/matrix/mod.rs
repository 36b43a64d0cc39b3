//! Travel-cost matrix.
//!
//! Provides the dense integer cost table all solvers read from.

mod cost;

pub use cost::CostMatrix;
