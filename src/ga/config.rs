//! Genetic algorithm parameters.

/// Population and operator parameters for the genetic search.
///
/// Defaults: population 50, 100 generations, crossover probability 0.8,
/// mutation probability 0.2. The run length is the fixed generation count;
/// there is no convergence-based early stop.
///
/// # Examples
///
/// ```
/// use fleetroute::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30);
/// assert_eq!(config.population_size(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    population_size: usize,
    max_generations: u32,
    crossover_rate: f64,
    mutation_rate: f64,
}

impl GaConfig {
    /// Sets the fixed population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations to run.
    pub fn with_max_generations(mut self, generations: u32) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the probability of applying crossover to a parent pair.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the probability of mutating a child.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Fixed population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Generation count.
    pub fn max_generations(&self) -> u32 {
        self.max_generations
    }

    /// Crossover probability.
    pub fn crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    /// Mutation probability.
    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
        }
    }
}
