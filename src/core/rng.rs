//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffle sequences
//! - **Unbiased**: Fisher-Yates produces each permutation with equal
//!   probability
//!
//! A seeded RNG makes every board layout reproducible, which is what the
//! tests (and any replay tooling) rely on. `from_entropy` exists for hosts
//! that just want a fresh game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing all deck shuffles.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place with Fisher-Yates.
    ///
    /// Walks from the last index down to 1, swapping index `i` with a
    /// uniformly chosen `j` in `[0, i]`. Each of the `n!` permutations is
    /// equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(
                rng1.gen_range_usize(0..1000),
                rng2.gen_range_usize(0..1000)
            );
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original); // Overwhelmingly likely for 10 elements

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_deterministic_per_seed() {
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);

        let mut a = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let mut b = a.clone();

        rng1.shuffle(&mut a);
        rng2.shuffle(&mut b);

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = GameRng::new(42);

        let mut empty: Vec<i32> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![9];
        rng.shuffle(&mut single);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_roughly_uniform() {
        // Each of the 4 elements should land in position 0 about 1/4 of
        // the time. With 2000 trials the expected count is 500; the
        // [400, 600] band is loose enough to be stable for a fixed seed
        // while still catching a biased swap loop.
        let mut rng = GameRng::new(1234);
        let trials = 2000;
        let mut counts = [0usize; 4];

        for _ in 0..trials {
            let mut data = [0usize, 1, 2, 3];
            rng.shuffle(&mut data);
            counts[data[0]] += 1;
        }

        for &count in &counts {
            assert!(
                (400..=600).contains(&count),
                "position-0 occupancy looks biased: {counts:?}"
            );
        }
    }
}
