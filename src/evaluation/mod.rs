//! Route and solution cost evaluation.

mod evaluator;

pub use evaluator::{route_cost, solution_cost};
