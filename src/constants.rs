pub const MINIMUM_LEAF_SIZE: usize = 20;
pub const MINIMUM_GAIN_SPLIT: f64 = 1e-7;
pub const UNLIMITED_DEPTH: usize = 0;
