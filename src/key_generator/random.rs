use ordered_float::OrderedFloat;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` random keys in `0..max`.
/// The same seed always produces the same sequence
pub struct RandomKeys {
    remaining: usize,
    max: u64,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, max: u64, seed: u64) -> RandomKeys {
        assert!(max > 0, "Invalid key range: empty");
        RandomKeys {
            remaining: num,
            max,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0, self.max))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}

/// An iterator that will generate `num` random floats in `[0, 1)`, wrapped so that they
/// can be used as tree keys
pub struct RandomFloatKeys {
    remaining: usize,
    rng: Pcg64,
}

impl RandomFloatKeys {
    pub fn new(num: usize, seed: u64) -> RandomFloatKeys {
        RandomFloatKeys {
            remaining: num,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomFloatKeys {
    type Item = OrderedFloat<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(OrderedFloat(self.rng.gen()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomFloatKeys {}

impl ExactSizeIterator for RandomFloatKeys {}
