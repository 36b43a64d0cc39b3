//! Route and solution types shared by every solver.

mod route;
mod solution;

pub use route::Route;
pub use solution::Solution;
