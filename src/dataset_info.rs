//! Dataset Info
//!
//! Per-feature metadata: whether a feature is numeric or categorical, and for
//! categorical features the bijection between the original string categories
//! and the numeric codes stored in the matrix.
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// The type of a single feature.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Datatype {
    Numeric,
    Categorical,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
struct CategoryMap {
    codes: HashMap<String, usize>,
    categories: Vec<String>,
}

/// Metadata for every feature (row) of a dataset.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct DatasetInfo {
    types: Vec<Datatype>,
    maps: HashMap<usize, CategoryMap>,
}

impl DatasetInfo {
    /// Create dataset info where every one of the `dimensionality` features is numeric.
    pub fn new(dimensionality: usize) -> Self {
        DatasetInfo {
            types: vec![Datatype::Numeric; dimensionality],
            maps: HashMap::new(),
        }
    }

    /// Number of features described.
    pub fn dimensionality(&self) -> usize {
        self.types.len()
    }

    /// The type of a feature.
    pub fn type_of(&self, dimension: usize) -> Datatype {
        self.types[dimension]
    }

    /// Override the type of a feature.
    pub fn set_type(&mut self, dimension: usize, datatype: Datatype) {
        self.types[dimension] = datatype;
    }

    /// Map a string category of a feature to its numeric code.
    ///
    /// Codes are assigned densely in first seen order, the same string always
    /// maps to the same code. The feature is marked as categorical.
    ///
    /// * `value` - The original category.
    /// * `dimension` - The feature the category belongs to.
    pub fn map_string(&mut self, value: &str, dimension: usize) -> f64 {
        self.types[dimension] = Datatype::Categorical;
        let map = self.maps.entry(dimension).or_default();
        if let Some(code) = map.codes.get(value) {
            return *code as f64;
        }
        let code = map.categories.len();
        map.codes.insert(value.to_string(), code);
        map.categories.push(value.to_string());
        code as f64
    }

    /// Recover the original category from a numeric code,
    /// `None` if the code was never mapped.
    pub fn unmap_string(&self, code: f64, dimension: usize) -> Option<&str> {
        if code.is_nan() || code < 0.0 || code.fract() != 0.0 {
            return None;
        }
        self.maps
            .get(&dimension)
            .and_then(|m| m.categories.get(code as usize))
            .map(|s| s.as_str())
    }

    /// Number of distinct categories mapped for a feature.
    pub fn num_mappings(&self, dimension: usize) -> usize {
        self.maps.get(&dimension).map_or(0, |m| m.categories.len())
    }
}
