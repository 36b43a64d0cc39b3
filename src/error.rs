//! Error types for problem construction and solver selection.

use thiserror::Error;

/// A fatal configuration error surfaced to the caller.
///
/// The solvers never attempt partial recovery: a malformed matrix or an
/// invalid vehicle count is rejected before any search starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoutingError {
    /// A cost matrix row does not have `n + 1` entries.
    #[error("cost matrix row {row} has {found} entries, expected {expected}")]
    MalformedRow {
        /// Zero-based row index.
        row: usize,
        /// Expected entry count (`n + 1`).
        expected: usize,
        /// Actual entry count.
        found: usize,
    },
    /// The vehicle count was zero.
    #[error("vehicle count must be at least 1")]
    InvalidVehicleCount,
    /// An unrecognized strategy name was given to [`Strategy::from_str`](crate::solver::Strategy).
    #[error("unknown strategy `{0}`, expected one of: exact, greedy, savings, annealing, genetic")]
    UnknownStrategy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_row_message() {
        let err = RoutingError::MalformedRow {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "cost matrix row 2 has 3 entries, expected 4"
        );
    }

    #[test]
    fn test_unknown_strategy_message() {
        let err = RoutingError::UnknownStrategy("fastest".into());
        assert!(err.to_string().contains("fastest"));
    }
}
