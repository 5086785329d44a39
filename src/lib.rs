mod constants;

// Modules
pub mod data;
pub mod dataset_info;
pub mod errors;
pub mod gain;
pub mod metric;
pub mod node;
pub mod sampler;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use data::{Matrix, MatrixMut};
pub use dataset_info::{DatasetInfo, Datatype};
pub use errors::SaplingError;
pub use gain::GainMethod;
pub use sampler::DimensionSelection;
pub use tree::config::{ModelIO, TreeConfig};
pub use tree::tree::DecisionTree;
