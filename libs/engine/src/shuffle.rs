//! Participant shuffling.
//!
//! The engine only needs "some permutation of the participants". The
//! [`Shuffle`] trait is the seam where the random source is injected, so
//! runs can be reproduced from a seed or pinned to a fixed order in tests.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Produces the base permutation for a run.
pub trait Shuffle {
    /// Permute `items` in place.
    fn shuffle(&mut self, items: &mut [String]);
}

/// In-place Fisher–Yates shuffle.
///
/// Walks `i` from the last index down to 1, swapping each element with a
/// uniformly drawn `j` in `[0, i]`. With a uniform `rng` every permutation
/// is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// [`Shuffle`] backed by a random number generator.
#[derive(Debug, Clone)]
pub struct FisherYates<R> {
    rng: R,
}

impl<R: Rng> FisherYates<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FisherYates<ThreadRng> {
    /// Shuffle with the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl FisherYates<StdRng> {
    /// Shuffle with a generator seeded from `seed`; the same seed always
    /// yields the same permutation.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Shuffle for FisherYates<R> {
    fn shuffle(&mut self, items: &mut [String]) {
        fisher_yates(items, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let original = names(&["Alice", "Bob", "Charlie", "Dana", "Eve"]);
        let mut shuffled = original.clone();
        FisherYates::seeded(7).shuffle(&mut shuffled);

        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let original = names(&["a", "b", "c", "d", "e", "f", "g", "h"]);

        let mut first = original.clone();
        let mut second = original.clone();
        FisherYates::seeded(42).shuffle(&mut first);
        FisherYates::seeded(42).shuffle(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut empty: Vec<String> = Vec::new();
        FisherYates::seeded(1).shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = names(&["only"]);
        FisherYates::seeded(1).shuffle(&mut single);
        assert_eq!(single, names(&["only"]));
    }

    #[test]
    fn test_every_permutation_reachable() {
        let original = [0u8, 1, 2];
        let mut seen = std::collections::BTreeSet::new();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..600 {
            let mut items = original;
            fisher_yates(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }
}
