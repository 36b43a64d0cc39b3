//! Permutation operators.
//!
//! Both operators preserve the permutation property: the child contains
//! exactly the values of its parents, each once.

use rand::Rng;

/// Order crossover (OX).
///
/// Copies a random sub-range of `parent1` into the child at the same
/// positions, then fills the remaining positions left to right with the
/// values of `parent2` in their original order, skipping values already
/// placed.
///
/// # Panics
///
/// Panics if the parents are empty or of different lengths. Values must be
/// customer indices in `1..=n`.
///
/// # Examples
///
/// ```
/// use fleetroute::ga::operators::order_crossover;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let child = order_crossover(&[1, 2, 3, 4], &[4, 3, 2, 1], &mut rng);
/// let mut sorted = child.clone();
/// sorted.sort();
/// assert_eq!(sorted, vec![1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    assert!(!parent1.is_empty() && parent1.len() == parent2.len());
    let n = parent1.len();

    let mut start = rng.random_range(0..n);
    let mut end = rng.random_range(0..n);
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    // 0 marks an unfilled slot; customer values start at 1.
    let mut child = vec![0usize; n];
    let mut placed = vec![false; n + 1];
    for i in start..=end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut from = parent2.iter().filter(|&&v| !placed[v]);
    for slot in child.iter_mut() {
        if *slot == 0 {
            *slot = *from.next().expect("parent2 covers all unplaced values");
        }
    }
    child
}

/// Swap mutation: exchanges two random positions.
///
/// A no-op on permutations shorter than two.
pub fn swap_mutation<R: Rng>(individual: &mut [usize], rng: &mut R) {
    if individual.len() < 2 {
        return;
    }
    let a = rng.random_range(0..individual.len());
    let b = rng.random_range(0..individual.len());
    individual.swap(a, b);
}
