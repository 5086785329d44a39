//! Tree Configuration
//!
//! Hyperparameters of the decision tree and the json persistence shared by the
//! configuration and the fitted tree.
use crate::constants::{MINIMUM_GAIN_SPLIT, MINIMUM_LEAF_SIZE, UNLIMITED_DEPTH};
use crate::errors::SaplingError;
use crate::gain::GainMethod;
use crate::sampler::DimensionSelection;
use crate::utils::{validate_min_usize_parameter, validate_positive_float_parameter};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_gain_method() -> GainMethod {
    GainMethod::Gini
}
fn default_minimum_leaf_size() -> usize {
    MINIMUM_LEAF_SIZE
}
fn default_minimum_gain_split() -> f64 {
    MINIMUM_GAIN_SPLIT
}
fn default_maximum_depth() -> usize {
    UNLIMITED_DEPTH
}
fn default_dimension_selection() -> DimensionSelection {
    DimensionSelection::All
}

/// Configuration for the `DecisionTree`.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TreeConfig {
    /// Gain metric used to score splits.
    #[serde(default = "default_gain_method")]
    pub gain_method: GainMethod,
    /// Minimum number of points in every leaf.
    #[serde(default = "default_minimum_leaf_size")]
    pub minimum_leaf_size: usize,
    /// Minimum gain improvement needed to split.
    #[serde(default = "default_minimum_gain_split")]
    pub minimum_gain_split: f64,
    /// Maximum depth of the tree, `0` for no limit and `1` for a decision stump.
    #[serde(default = "default_maximum_depth")]
    pub maximum_depth: usize,
    /// Features evaluated at every node.
    #[serde(default = "default_dimension_selection")]
    pub dimension_selection: DimensionSelection,
    /// Seed for random number generation.
    #[serde(default)]
    pub seed: u64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            gain_method: GainMethod::Gini,
            minimum_leaf_size: MINIMUM_LEAF_SIZE,
            minimum_gain_split: MINIMUM_GAIN_SPLIT,
            maximum_depth: UNLIMITED_DEPTH,
            dimension_selection: DimensionSelection::All,
            seed: 0,
        }
    }
}

impl TreeConfig {
    /// Check every parameter is within its allowed range.
    pub fn validate(&self) -> Result<(), SaplingError> {
        validate_min_usize_parameter(self.minimum_leaf_size, 1, "minimum_leaf_size")?;
        validate_positive_float_parameter(self.minimum_gain_split, "minimum_gain_split")?;
        if let DimensionSelection::Random(n) = self.dimension_selection {
            validate_min_usize_parameter(n, 1, "dimension_selection")?;
        }
        Ok(())
    }
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save a model as a json object to a file.
    ///
    /// * `path` - Path to save the model.
    fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), SaplingError> {
        fs::write(path, self.json_dump()?).map_err(|e| SaplingError::UnableToWrite(e.to_string()))
    }

    /// Dump a model as a json object
    fn json_dump(&self) -> Result<String, SaplingError> {
        serde_json::to_string(self).map_err(|e| SaplingError::UnableToWrite(e.to_string()))
    }

    /// Load a model from Json string
    ///
    /// * `json_str` - String object, which can be serialized to json.
    fn from_json(json_str: &str) -> Result<Self, SaplingError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| SaplingError::UnableToRead(e.to_string()))
    }

    /// Load a model from a path to a json object.
    ///
    /// * `path` - Path to load the model from.
    fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, SaplingError> {
        let json_str = fs::read_to_string(path).map_err(|e| SaplingError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for TreeConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tree_config_default() {
        let config = TreeConfig::default();
        assert_eq!(config.gain_method, GainMethod::Gini);
        assert_eq!(config.minimum_leaf_size, 20);
        assert_eq!(config.minimum_gain_split, 1e-7);
        assert_eq!(config.maximum_depth, 0);
        assert_eq!(config.dimension_selection, DimensionSelection::All);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tree_config_validate() {
        let config = TreeConfig {
            minimum_leaf_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SaplingError::InvalidParameter(..))));

        let config = TreeConfig {
            minimum_gain_split: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TreeConfig {
            minimum_gain_split: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TreeConfig {
            dimension_selection: DimensionSelection::Random(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tree_config_missing_fields() {
        let config: TreeConfig = serde_json::from_str(r#"{"minimum_leaf_size": 5}"#).unwrap();
        assert_eq!(config.minimum_leaf_size, 5);
        assert_eq!(config, TreeConfig { minimum_leaf_size: 5, ..Default::default() });
    }

    #[test]
    fn test_model_io_json() {
        let config = TreeConfig {
            gain_method: GainMethod::Information,
            dimension_selection: DimensionSelection::Random(3),
            seed: 11,
            ..Default::default()
        };
        let json = config.json_dump().unwrap();
        let config2 = TreeConfig::from_json(&json).unwrap();
        assert_eq!(config, config2);
        assert!(matches!(TreeConfig::from_json("{"), Err(SaplingError::UnableToRead(_))));
    }

    #[test]
    fn test_model_io_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let config = TreeConfig::default();
        config.save_model(&file_path).unwrap();
        let config2 = TreeConfig::load_model(&file_path).unwrap();
        assert_eq!(config, config2);
        assert!(TreeConfig::load_model(dir.path().join("missing.json")).is_err());
    }
}
