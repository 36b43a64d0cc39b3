//! Annealing schedule parameters.

/// Temperature schedule and move parameters for simulated annealing.
///
/// The defaults match the classic schedule: start at 1000, multiply by
/// 0.99 after each batch of 100 inner iterations, stop below 0.01. The
/// acceptance probability uses raw cost deltas, so the initial temperature
/// should be on the order of the instance's cost magnitudes.
///
/// # Examples
///
/// ```
/// use fleetroute::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_max_iterations(10_000);
/// assert_eq!(config.initial_temperature(), 500.0);
/// ```
#[derive(Debug, Clone)]
pub struct AnnealingConfig {
    initial_temperature: f64,
    cooling_rate: f64,
    min_temperature: f64,
    iterations_per_temperature: u32,
    max_move_attempts: u32,
    max_iterations: Option<u64>,
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the multiplicative cooling factor applied per outer iteration.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    /// Sets the temperature floor that terminates the run.
    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    /// Sets the number of inner iterations per temperature step.
    pub fn with_iterations_per_temperature(mut self, count: u32) -> Self {
        self.iterations_per_temperature = count;
        self
    }

    /// Sets how often neighbor generation retries before giving up and
    /// reusing the current solution.
    pub fn with_max_move_attempts(mut self, attempts: u32) -> Self {
        self.max_move_attempts = attempts;
        self
    }

    /// Caps the total number of inner iterations. This is the external
    /// cancellation point: the run stops at the cap even if the
    /// temperature has not reached the floor.
    pub fn with_max_iterations(mut self, cap: u64) -> Self {
        self.max_iterations = Some(cap);
        self
    }

    /// Starting temperature.
    pub fn initial_temperature(&self) -> f64 {
        self.initial_temperature
    }

    /// Multiplicative cooling factor.
    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// Temperature floor.
    pub fn min_temperature(&self) -> f64 {
        self.min_temperature
    }

    /// Inner iterations per temperature step.
    pub fn iterations_per_temperature(&self) -> u32 {
        self.iterations_per_temperature
    }

    /// Neighbor-generation retry bound.
    pub fn max_move_attempts(&self) -> u32 {
        self.max_move_attempts
    }

    /// Total inner-iteration cap, if any.
    pub fn max_iterations(&self) -> Option<u64> {
        self.max_iterations
    }
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            min_temperature: 0.01,
            iterations_per_temperature: 100,
            max_move_attempts: 10,
            max_iterations: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = AnnealingConfig::default();
        assert_eq!(c.initial_temperature(), 1000.0);
        assert_eq!(c.cooling_rate(), 0.99);
        assert_eq!(c.min_temperature(), 0.01);
        assert_eq!(c.iterations_per_temperature(), 100);
        assert_eq!(c.max_move_attempts(), 10);
        assert!(c.max_iterations().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let c = AnnealingConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.5)
            .with_min_temperature(1.0)
            .with_iterations_per_temperature(5)
            .with_max_move_attempts(3)
            .with_max_iterations(42);
        assert_eq!(c.initial_temperature(), 10.0);
        assert_eq!(c.cooling_rate(), 0.5);
        assert_eq!(c.min_temperature(), 1.0);
        assert_eq!(c.iterations_per_temperature(), 5);
        assert_eq!(c.max_move_attempts(), 3);
        assert_eq!(c.max_iterations(), Some(42));
    }
}
