use super::tree::DecisionTree;
use crate::gain::GainMethod;
use crate::sampler::DimensionSelection;

impl DecisionTree {
    // Set methods for paramters

    /// Set the gain method on the tree.
    /// * `gain_method` - Metric used to score candidate splits.
    pub fn set_gain_method(mut self, gain_method: GainMethod) -> Self {
        self.cfg.gain_method = gain_method;
        self
    }

    /// Set the minimum leaf size on the tree.
    /// * `minimum_leaf_size` - Minimum number of points in every leaf. Larger values
    ///   give smaller trees, a value of 1 lets the tree fit the training data exactly.
    pub fn set_minimum_leaf_size(mut self, minimum_leaf_size: usize) -> Self {
        self.cfg.minimum_leaf_size = minimum_leaf_size;
        self
    }

    /// Set the minimum gain split on the tree.
    /// * `minimum_gain_split` - Minimum improvement in gain a split must exceed.
    pub fn set_minimum_gain_split(mut self, minimum_gain_split: f64) -> Self {
        self.cfg.minimum_gain_split = minimum_gain_split;
        self
    }

    /// Set the maximum depth on the tree.
    /// * `maximum_depth` - Maximum depth, `0` for no limit and `1` for a decision stump.
    pub fn set_maximum_depth(mut self, maximum_depth: usize) -> Self {
        self.cfg.maximum_depth = maximum_depth;
        self
    }

    /// Set the dimension selection on the tree.
    /// * `dimension_selection` - Features evaluated at every node.
    pub fn set_dimension_selection(mut self, dimension_selection: DimensionSelection) -> Self {
        self.cfg.dimension_selection = dimension_selection;
        self
    }

    /// Set the seed on the tree.
    /// * `seed` - Seed of the generator used by random dimension selection.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }
}
