//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use thiserror::Error;

/// Errors that can occur while fitting, classifying with, or persisting a decision tree.
#[derive(Debug, Error)]
pub enum SaplingError {
    /// The training matrix has no points or no features.
    #[error("The dataset is empty, at least one point and one feature are required.")]
    EmptyDataset,
    /// The number of classes was zero.
    #[error("The number of classes must be at least 1.")]
    NoClasses,
    /// First value is what was being compared, second is expected, third is what was found.
    #[error("Dimension mismatch for {0}, expected {1} but {2} provided.")]
    DimensionMismatch(String, usize, usize),
    /// A label was not in `[0, num_classes)`.
    #[error("Label {0} is out of range for {1} classes.")]
    LabelOutOfRange(usize, usize),
    /// Negative or NaN weight at an index.
    #[error("Weight at index {0} is {1}, weights must be non-negative numbers.")]
    InvalidWeight(usize, f64),
    /// NaN value found in the training features.
    #[error("A NaN value was found in feature {0} of point {1}.")]
    NanValueFound(usize, usize),
    /// A categorical training value is not a mapped category code.
    #[error("Value {2} in categorical feature {0} of point {1} is not a mapped category code.")]
    InvalidCategory(usize, usize, f64),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
    /// The tree has not been fit yet.
    #[error("The decision tree has not been fit, call fit before classifying.")]
    NotFitted,
}
