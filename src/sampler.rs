//! Sampler
//!
//! Strategies for choosing which features are evaluated when a node is split.
//! Randomness is only reached through the narrow [`RandomSource`] capability, so
//! the tree builder does not depend on a specific generator.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Source of random integers.
pub trait RandomSource {
    /// Uniform random integer in `[0, bound)`.
    fn random_int(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn random_int(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Which features are considered at every node.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum DimensionSelection {
    /// Evaluate every feature.
    All,
    /// Evaluate this many distinct features, drawn at random for every node.
    Random(usize),
}

impl DimensionSelection {
    /// Fill `selected` with the features to evaluate, in increasing order.
    ///
    /// * `n_features` - Total number of features.
    /// * `rng` - Random source, only used by `Random`.
    /// * `selected` - Output buffer, cleared first.
    pub fn select<R: RandomSource>(&self, n_features: usize, rng: &mut R, selected: &mut Vec<usize>) {
        selected.clear();
        selected.extend(0..n_features);
        if let DimensionSelection::Random(n) = *self {
            let n = n.min(n_features);
            // Partial Fisher-Yates shuffle.
            for i in 0..n {
                let j = i + rng.random_int(n_features - i);
                selected.swap(i, j);
            }
            selected.truncate(n);
            selected.sort_unstable();
        }
    }
}
