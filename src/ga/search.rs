//! Generational loop with elitism and roulette-wheel selection.
//!
//! # Algorithm
//!
//! Individuals are permutations of the customers `1..=n`; each decodes to
//! a route set by contiguous chunking and is scored as
//! `fitness = 1 / (cost + 1)`. Every generation starts the next
//! population with the best individual ever seen (unconditional elitism),
//! then refills it by sampling parent pairs with probability proportional
//! to fitness, applying order crossover with a fixed probability (the
//! first parent passes through otherwise) and swap mutation with another.
//! The run lasts a fixed number of generations.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::GaConfig;
use super::decode::decode;
use super::operators::{order_crossover, swap_mutation};
use crate::evaluation::solution_cost;
use crate::matrix::CostMatrix;
use crate::models::Solution;

/// Runs the genetic search and returns the decoded best individual.
///
/// The random generator is owned by the caller; seeding it makes the run
/// reproducible.
///
/// # Panics
///
/// Panics if `num_vehicles` is zero or the configured population is empty.
///
/// # Examples
///
/// ```
/// use fleetroute::ga::{genetic_algorithm, GaConfig};
/// use fleetroute::matrix::CostMatrix;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let solution = genetic_algorithm(&matrix, 1, &config, &mut rng);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn genetic_algorithm<R: Rng>(
    matrix: &CostMatrix,
    num_vehicles: usize,
    config: &GaConfig,
    rng: &mut R,
) -> Solution {
    assert!(num_vehicles >= 1, "at least one vehicle is required");
    assert!(config.population_size() >= 1, "population must not be empty");

    let n = matrix.num_customers();
    if n == 0 {
        return decode(&[], num_vehicles);
    }

    let mut population: Vec<Vec<usize>> = (0..config.population_size())
        .map(|_| {
            let mut perm: Vec<usize> = (1..=n).collect();
            perm.shuffle(rng);
            perm
        })
        .collect();

    let mut best: Vec<usize> = population[0].clone();
    let mut best_fitness = evaluate(&best, matrix, num_vehicles);

    for _ in 0..config.max_generations() {
        let fitness: Vec<f64> = population
            .iter()
            .map(|individual| evaluate(individual, matrix, num_vehicles))
            .collect();
        for (individual, &fit) in population.iter().zip(&fitness) {
            if fit > best_fitness {
                best_fitness = fit;
                best = individual.clone();
            }
        }

        // Fitness values are strictly positive, so the weights are valid.
        let selection =
            WeightedIndex::new(&fitness).expect("fitness weights are positive and finite");

        let mut next = Vec::with_capacity(config.population_size());
        next.push(best.clone());
        while next.len() < config.population_size() {
            let parent1 = &population[selection.sample(rng)];
            let parent2 = &population[selection.sample(rng)];

            let mut child = if rng.random::<f64>() < config.crossover_rate() {
                order_crossover(parent1, parent2, rng)
            } else {
                parent1.clone()
            };
            if rng.random::<f64>() < config.mutation_rate() {
                swap_mutation(&mut child, rng);
            }
            next.push(child);
        }
        population = next;
    }

    decode(&best, num_vehicles)
}

/// Fitness of one individual: the monotone inverse of its decoded cost.
/// The `+ 1` keeps a zero-cost solution finite.
fn evaluate(individual: &[usize], matrix: &CostMatrix, num_vehicles: usize) -> f64 {
    let cost = solution_cost(&decode(individual, num_vehicles), matrix);
    1.0 / (cost as f64 + 1.0)
}
